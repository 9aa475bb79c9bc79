//! Label vocabulary of the merged graph

use minaa_core::{AlignError, AlignmentIndex, AlignmentMatrix, Result};
use std::collections::HashSet;

/// Merged-graph label of every G and H node under one alignment index.
///
/// An aligned pair shares the fused label `g_label + h_label`; an unaligned
/// node keeps its own label.
pub struct NodeLabels<'a> {
    index: &'a AlignmentIndex,
    g_labels: &'a [String],
    h_labels: &'a [String],
}

impl<'a> NodeLabels<'a> {
    pub fn new(index: &'a AlignmentIndex, g_labels: &'a [String], h_labels: &'a [String]) -> Result<Self> {
        check_count("G", index.g_count(), g_labels.len())?;
        check_count("H", index.h_count(), h_labels.len())?;
        Ok(NodeLabels {
            index,
            g_labels,
            h_labels,
        })
    }

    pub fn g(&self, g: usize) -> String {
        match self.index.h_of(g) {
            Some(h) => fuse(&self.g_labels[g], &self.h_labels[h]),
            None => self.g_labels[g].clone(),
        }
    }

    pub fn h(&self, h: usize) -> String {
        match self.index.g_of(h) {
            Some(g) => fuse(&self.g_labels[g], &self.h_labels[h]),
            None => self.h_labels[h].clone(),
        }
    }
}

fn fuse(g_label: &str, h_label: &str) -> String {
    format!("{g_label}{h_label}")
}

pub(crate) fn check_count(graph: &'static str, nodes: usize, labels: usize) -> Result<()> {
    if nodes != labels {
        return Err(AlignError::LabelCount {
            graph,
            nodes,
            labels,
        });
    }
    Ok(())
}

/// Ordered label vocabulary: one label per G node (fused with its first
/// match if it has one), then the own label of every H node that no G node
/// selected.
pub fn merge_labels(
    alignment: &AlignmentMatrix,
    g_labels: &[String],
    h_labels: &[String],
    gamma: f64,
) -> Result<Vec<String>> {
    let index = AlignmentIndex::new(alignment, gamma);
    let names = NodeLabels::new(&index, g_labels, h_labels)?;

    let mut merged: Vec<String> = (0..index.g_count()).map(|g| names.g(g)).collect();
    merged.extend(
        (0..index.h_count())
            .filter(|&h| index.g_of(h).is_none())
            .map(|h| names.h(h)),
    );

    let distinct: HashSet<&str> = merged.iter().map(String::as_str).collect();
    if distinct.len() != merged.len() {
        tracing::warn!(
            "Merged vocabulary has {} duplicate labels; edges resolve to the first occurrence",
            merged.len() - distinct.len()
        );
    }

    Ok(merged)
}
