//! Bridged and merged graphs from an alignment
//!
//! Both builders take the two input adjacency matrices and an alignment.
//! Bridging keeps node identities apart and only adds edges between aligned
//! nodes; merging fuses aligned pairs and records where each edge came from.

pub mod assign;
pub mod bridge;
pub mod graph;
pub mod labels;
pub mod merge;


#[cfg(test)]
pub mod test_utils;

pub use assign::IndexedAssigner;
pub use bridge::bridge;
pub use graph::MergedGraph;
pub use labels::{merge_labels, NodeLabels};
pub use merge::{merge, merge_graphs};
