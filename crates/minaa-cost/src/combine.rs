//! Blending topological and biological costs

use minaa_core::{AlignError, CostMatrix, Result};

/// Beta to actually use: out-of-range values fall back to 1 (topology only).
pub fn resolve_beta(beta: f64) -> f64 {
    if (0.0..=1.0).contains(&beta) {
        beta
    } else {
        tracing::warn!("Beta must be between 0 and 1, got {}. Defaulting to beta = 1.", beta);
        1.0
    }
}

/// Blend `beta * topo + (1 - beta) * bio`.
///
/// Missing or empty biological costs leave `topo` unchanged, as does an
/// out-of-range beta (with a warning). Otherwise the shapes must agree.
pub fn combine(topo: CostMatrix, bio: Option<&CostMatrix>, beta: f64) -> Result<CostMatrix> {
    let bio = match bio {
        Some(bio) if !bio.is_empty() => bio,
        _ => {
            tracing::debug!("No biological costs; using topological costs only");
            return Ok(topo);
        }
    };

    if resolve_beta(beta) != beta {
        return Ok(topo);
    }

    if topo.dim() != bio.dim() {
        return Err(AlignError::DimensionMismatch {
            what: "biological cost matrix",
            expected: topo.dim(),
            found: bio.dim(),
        });
    }

    Ok(topo * beta + bio * (1.0 - beta))
}

/// Rescale into [0, 1]: shift up by |min| if anything is negative, then
/// divide by the max. A matrix whose max is 0 comes back as all zeros.
pub fn normalize(mut matrix: CostMatrix) -> CostMatrix {
    if matrix.is_empty() {
        return matrix;
    }

    let min = matrix.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = matrix.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min < 0.0 {
        let shift = min.abs();
        matrix.mapv_inplace(|x| x + shift);
        max += shift;
    }

    if max <= 0.0 {
        matrix.fill(0.0);
        return matrix;
    }

    matrix.mapv_inplace(|x| x / max);
    matrix
}
