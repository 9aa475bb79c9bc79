//! Merged graph: label vocabulary plus provenance-coded adjacency

use minaa_core::{CodeMatrix, Provenance};
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The merged graph handed back for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedGraph {
    pub labels: Vec<String>,
    /// Square, symmetric, codes 0..=3.
    pub matrix: CodeMatrix,
}

impl MergedGraph {
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Provenance of the edge between two labels, if both exist.
    pub fn provenance(&self, a: &str, b: &str) -> Option<Provenance> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Provenance::from_code(self.matrix[[i, j]])
    }

    /// Undirected edges as (i, j, provenance) with i < j.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Provenance)> + '_ {
        let n = self.node_count();
        (0..n).flat_map(move |i| {
            (i + 1..n).filter_map(move |j| match Provenance::from_code(self.matrix[[i, j]]) {
                Some(Provenance::None) | None => None,
                Some(p) => Some((i, j, p)),
            })
        })
    }

    /// Number of edges carrying the given provenance.
    pub fn count(&self, provenance: Provenance) -> usize {
        self.edges().filter(|&(_, _, p)| p == provenance).count()
    }

    /// Undirected petgraph view, node weights are labels.
    pub fn to_graph(&self) -> UnGraph<String, Provenance> {
        let mut graph = UnGraph::with_capacity(self.node_count(), 0);
        let nodes: Vec<_> = self.labels.iter().map(|l| graph.add_node(l.clone())).collect();
        for (i, j, provenance) in self.edges() {
            graph.add_edge(nodes[i], nodes[j], provenance);
        }
        graph
    }
}

impl fmt::Display for MergedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{label}:")?;
            for code in self.matrix.row(i) {
                write!(f, " {code}")?;
            }
        }
        Ok(())
    }
}
