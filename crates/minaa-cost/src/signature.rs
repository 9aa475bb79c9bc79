//! Topological cost between nodes of two graphs, from their graphlet degree vectors

use crate::orbit::{total_weight, weight};
use minaa_core::{CostMatrix, Signature, ORBIT_COUNT};

/// Weighted, log-scaled distance between two counts of the same orbit.
///
/// Zero when the counts are equal, including when both are zero.
pub fn distance(v_count: u32, u_count: u32, orbit: usize) -> f64 {
    let v = f64::from(v_count);
    let u = f64::from(u_count);
    let diff = ((v + 1.0).log10() - (u + 1.0).log10()).abs();
    diff / (v.max(u) + 2.0).log10() * weight(orbit)
}

/// Signature similarity of two nodes; 1 means identical signatures.
pub fn similarity(v: &Signature, u: &Signature) -> f64 {
    let dist: f64 = v
        .counts()
        .iter()
        .zip(u.counts())
        .enumerate()
        .map(|(orbit, (&vi, &ui))| distance(vi, ui, orbit))
        .sum();
    1.0 - dist / total_weight()
}

/// Cost of aligning node `v` of G with node `u` of H. Lower is better.
///
/// `alpha` trades the degree term (alpha = 0) against full signature
/// similarity (alpha = 1).
pub fn cost(v: &Signature, u: &Signature, g_max_degree: u32, h_max_degree: u32, alpha: f64) -> f64 {
    let max_sum = f64::from(g_max_degree) + f64::from(h_max_degree);
    let node_degs = if max_sum > 0.0 {
        (f64::from(v.degree()) + f64::from(u.degree())) / max_sum
    } else {
        0.0
    };

    1.0 - ((1.0 - alpha) * node_degs + alpha * similarity(v, u))
}

/// Highest degree among the given signatures, 0 for an empty graph.
pub fn max_degree(signatures: &[Signature]) -> u32 {
    signatures.iter().map(Signature::degree).max().unwrap_or(0)
}

/// Dense |G| x |H| topological cost matrix.
pub fn build_cost_matrix(g: &[Signature], h: &[Signature], alpha: f64) -> CostMatrix {
    debug_assert!((0.0..=1.0).contains(&alpha), "alpha out of range: {alpha}");

    let g_max_degree = max_degree(g);
    let h_max_degree = max_degree(h);

    tracing::debug!(
        "Building {}x{} cost matrix over {} orbits (max degrees {} / {}, alpha {})",
        g.len(),
        h.len(),
        ORBIT_COUNT,
        g_max_degree,
        h_max_degree,
        alpha
    );

    CostMatrix::from_shape_fn((g.len(), h.len()), |(i, j)| {
        cost(&g[i], &h[j], g_max_degree, h_max_degree, alpha)
    })
}
