//! Collapse aligned node pairs and tag every edge with its provenance

use crate::assign::IndexedAssigner;
use crate::graph::MergedGraph;
use crate::labels::{check_count, merge_labels, NodeLabels};
use minaa_core::{AdjacencyMatrix, AlignmentIndex, AlignmentMatrix, CodeMatrix, Provenance, Result};

/// Merged adjacency over `merged_labels` with provenance codes.
///
/// Walks every G node, then every H node left unaligned. For an aligned
/// pair (gi, hj):
/// - a G neighbour gk is coded `Both` if gk is aligned to some hl and H
///   joins hj and hl, otherwise `GOnly`;
/// - an H neighbour hk is coded `HOnly` unless its G counterpart gl exists
///   and G already joins gi and gl, in which case the G side coded it.
///
/// Unaligned G nodes contribute `GOnly` edges and unaligned H nodes `HOnly`
/// edges, using fused labels for aligned neighbours. Self-loops are ignored.
pub fn merge(
    g_adj: &AdjacencyMatrix,
    h_adj: &AdjacencyMatrix,
    alignment: &AlignmentMatrix,
    g_labels: &[String],
    h_labels: &[String],
    merged_labels: &[String],
    gamma: f64,
) -> Result<CodeMatrix> {
    let g_count = g_adj.node_count();
    let h_count = h_adj.node_count();
    alignment.ensure_dim(g_count, h_count)?;
    check_count("G", g_count, g_labels.len())?;
    check_count("H", h_count, h_labels.len())?;

    let index = AlignmentIndex::new(alignment, gamma);
    let names = NodeLabels::new(&index, g_labels, h_labels)?;
    let mut assigner = IndexedAssigner::new(merged_labels);

    for gi in 0..g_count {
        let own = names.g(gi);

        let Some(hj) = index.h_of(gi) else {
            for gk in g_adj.neighbors(gi) {
                assigner.assign(&own, &names.g(gk), Provenance::GOnly)?;
            }
            continue;
        };

        for gk in g_adj.neighbors(gi) {
            let code = match index.h_of(gk) {
                Some(hl) if h_adj.has_edge(hj, hl) => Provenance::Both,
                _ => Provenance::GOnly,
            };
            assigner.assign(&own, &names.g(gk), code)?;
        }

        for hk in h_adj.neighbors(hj) {
            if let Some(gl) = index.g_of(hk) {
                if g_adj.has_edge(gi, gl) {
                    continue;
                }
            }
            assigner.assign(&own, &names.h(hk), Provenance::HOnly)?;
        }
    }

    for hj in (0..h_count).filter(|&h| index.g_of(h).is_none()) {
        let own = names.h(hj);
        for hk in h_adj.neighbors(hj) {
            assigner.assign(&own, &names.h(hk), Provenance::HOnly)?;
        }
    }

    let merged = assigner.finish();
    tracing::debug!(
        "Merged {}+{} nodes into {} ({} aligned pairs)",
        g_count,
        h_count,
        merged.nrows(),
        index.pairs().len()
    );
    Ok(merged)
}

/// Label vocabulary and merged matrix in one step.
pub fn merge_graphs(
    g_adj: &AdjacencyMatrix,
    h_adj: &AdjacencyMatrix,
    alignment: &AlignmentMatrix,
    g_labels: &[String],
    h_labels: &[String],
    gamma: f64,
) -> Result<MergedGraph> {
    let labels = merge_labels(alignment, g_labels, h_labels, gamma)?;
    let matrix = merge(g_adj, h_adj, alignment, g_labels, h_labels, &labels, gamma)?;
    Ok(MergedGraph { labels, matrix })
}
