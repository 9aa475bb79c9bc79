//! First-match alignment index

use crate::model::AlignmentMatrix;
use serde::{Deserialize, Serialize};

/// One accepted correspondence between a G node and an H node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub g: usize,
    pub h: usize,
    pub score: f64,
}

/// Counterpart lookup built once per alignment and threshold.
///
/// Row `g` is aligned to its first accepted column by scan order. Column `h`
/// is aligned back to the first row (by scan order) that chose it, so an H
/// node only counts as aligned if some G node's first match selects it.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentIndex {
    g_to_h: Vec<Option<usize>>,
    h_to_g: Vec<Option<usize>>,
    pairs: Vec<AlignedPair>,
}

impl AlignmentIndex {
    pub fn new(alignment: &AlignmentMatrix, gamma: f64) -> Self {
        let (g_count, h_count) = alignment.dim();
        let mut g_to_h = Vec::with_capacity(g_count);
        let mut h_to_g = vec![None; h_count];
        let mut pairs = Vec::new();

        for g in 0..g_count {
            let matched = alignment.first_match(g, gamma);
            if let Some(h) = matched {
                if h_to_g[h].is_none() {
                    h_to_g[h] = Some(g);
                }
                pairs.push(AlignedPair {
                    g,
                    h,
                    score: alignment.score(g, h),
                });
            }
            g_to_h.push(matched);
        }

        tracing::debug!(
            "Alignment index: {} of {} G nodes aligned at gamma {}",
            pairs.len(),
            g_count,
            gamma
        );

        AlignmentIndex {
            g_to_h,
            h_to_g,
            pairs,
        }
    }

    /// H counterpart of G node `g`, if any.
    pub fn h_of(&self, g: usize) -> Option<usize> {
        self.g_to_h[g]
    }

    /// G counterpart of H node `h`, if any.
    pub fn g_of(&self, h: usize) -> Option<usize> {
        self.h_to_g[h]
    }

    pub fn g_count(&self) -> usize {
        self.g_to_h.len()
    }

    pub fn h_count(&self) -> usize {
        self.h_to_g.len()
    }

    /// Accepted pairs in G order.
    pub fn pairs(&self) -> &[AlignedPair] {
        &self.pairs
    }
}
