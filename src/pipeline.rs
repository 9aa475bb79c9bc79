//! Alignment pipeline: costs, external aligner, bridge and merge

use anyhow::{Context, Result};
use minaa_core::{
    AdjacencyMatrix, AlignParams, AlignedPair, AlignError, AlignmentIndex, AlignmentMatrix,
    CodeMatrix, CostMatrix, Signature,
};
use minaa_merge::MergedGraph;
use serde::Serialize;

/// Computes an alignment from a cost matrix. Lower cost means better match.
///
/// The returned matrix must be |G| x |H| with scores in [0, 1].
pub trait Aligner {
    fn align(&self, costs: &CostMatrix) -> Result<AlignmentMatrix>;

    fn name(&self) -> &str;
}

/// One input graph: structure, signatures and labels, all in node order.
#[derive(Debug, Clone)]
pub struct GraphInput {
    pub adjacency: AdjacencyMatrix,
    pub signatures: Vec<Signature>,
    pub labels: Vec<String>,
}

impl GraphInput {
    pub fn new(
        adjacency: AdjacencyMatrix,
        signatures: Vec<Signature>,
        labels: Vec<String>,
    ) -> minaa_core::Result<Self> {
        let nodes = adjacency.node_count();
        if signatures.len() != nodes {
            return Err(AlignError::DimensionMismatch {
                what: "signature list",
                expected: (nodes, minaa_core::ORBIT_COUNT),
                found: (signatures.len(), minaa_core::ORBIT_COUNT),
            });
        }
        if labels.len() != nodes {
            return Err(AlignError::LabelCount {
                graph: "input graph",
                nodes,
                labels: labels.len(),
            });
        }
        Ok(GraphInput {
            adjacency,
            signatures,
            labels,
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }
}

/// Everything a run produces, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentRun {
    pub costs: CostMatrix,
    pub combined: CostMatrix,
    pub alignment: AlignmentMatrix,
    pub pairs: Vec<AlignedPair>,
    pub bridged: CodeMatrix,
    pub merged: MergedGraph,
}

/// Align `g` to `h`.
///
/// Builds the topological costs, blends in `bio` if given, hands the result
/// to `aligner`, then bridges and merges the two graphs under the returned
/// alignment.
pub fn run(
    g: &GraphInput,
    h: &GraphInput,
    bio: Option<&CostMatrix>,
    params: &AlignParams,
    aligner: &dyn Aligner,
) -> Result<AlignmentRun> {
    params.validate().context("invalid alignment parameters")?;
    tracing::info!(
        "Aligning G ({} nodes) to H ({} nodes) with {}",
        g.node_count(),
        h.node_count(),
        aligner.name()
    );

    let costs = minaa_cost::build_cost_matrix(&g.signatures, &h.signatures, params.alpha);
    let combined = minaa_cost::combine(costs.clone(), bio, params.beta)
        .context("failed to combine topological and biological costs")?;

    let alignment = aligner
        .align(&combined)
        .with_context(|| format!("aligner `{}` failed", aligner.name()))?;
    alignment
        .ensure_dim(g.node_count(), h.node_count())
        .with_context(|| format!("aligner `{}` returned a malformed alignment", aligner.name()))?;

    let pairs = AlignmentIndex::new(&alignment, params.gamma).pairs().to_vec();
    tracing::info!("{} aligned pairs at gamma {}", pairs.len(), params.gamma);

    let bridged = minaa_merge::bridge(&g.adjacency, &h.adjacency, &alignment, params.gamma)
        .context("failed to bridge graphs")?;
    let merged = minaa_merge::merge_graphs(
        &g.adjacency,
        &h.adjacency,
        &alignment,
        &g.labels,
        &h.labels,
        params.gamma,
    )
    .context("failed to merge graphs")?;

    tracing::info!(
        "Merged graph: {} nodes, {} edges",
        merged.node_count(),
        merged.edges().count()
    );

    Ok(AlignmentRun {
        costs,
        combined,
        alignment,
        pairs,
        bridged,
        merged,
    })
}
