//! Stitch two graphs together at their aligned nodes

use minaa_core::{AdjacencyMatrix, AlignmentMatrix, CodeMatrix, Result};

/// Block adjacency matrix of size |G| + |H|.
///
/// The diagonal blocks hold G's and H's edges (self-loops dropped), the
/// off-diagonal blocks hold one bridging edge per accepted alignment cell.
/// Every accepted cell bridges, not just the first of each row.
pub fn bridge(
    g_adj: &AdjacencyMatrix,
    h_adj: &AdjacencyMatrix,
    alignment: &AlignmentMatrix,
    gamma: f64,
) -> Result<CodeMatrix> {
    let g_count = g_adj.node_count();
    let h_count = h_adj.node_count();
    alignment.ensure_dim(g_count, h_count)?;

    let size = g_count + h_count;
    let mut bridged = CodeMatrix::zeros((size, size));

    for i in 0..g_count {
        for j in g_adj.neighbors(i) {
            bridged[[i, j]] = 1;
        }
    }

    for i in 0..h_count {
        for j in h_adj.neighbors(i) {
            bridged[[g_count + i, g_count + j]] = 1;
        }
    }

    let mut bridges = 0;
    for i in 0..g_count {
        for j in 0..h_count {
            if alignment.is_aligned(i, j, gamma) {
                bridged[[i, g_count + j]] = 1;
                bridged[[g_count + j, i]] = 1;
                bridges += 1;
            }
        }
    }

    tracing::debug!("Bridged {}+{} nodes with {} bridging edges", g_count, h_count, bridges);
    Ok(bridged)
}
