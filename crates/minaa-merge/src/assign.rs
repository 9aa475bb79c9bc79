//! Symmetric writes into the merged matrix, addressed by label

use minaa_core::{AlignError, CodeMatrix, Provenance, Result};
use std::collections::HashMap;

/// Builds a merged matrix over a fixed label vocabulary.
pub struct IndexedAssigner<'a> {
    positions: HashMap<&'a str, usize>,
    matrix: CodeMatrix,
}

impl<'a> IndexedAssigner<'a> {
    pub fn new(merged_labels: &'a [String]) -> Self {
        let mut positions = HashMap::with_capacity(merged_labels.len());
        for (pos, label) in merged_labels.iter().enumerate() {
            // First occurrence wins
            positions.entry(label.as_str()).or_insert(pos);
        }
        let n = merged_labels.len();
        IndexedAssigner {
            positions,
            matrix: CodeMatrix::zeros((n, n)),
        }
    }

    pub fn position(&self, label: &str) -> Result<usize> {
        self.positions
            .get(label)
            .copied()
            .ok_or_else(|| AlignError::LabelNotFound(label.to_string()))
    }

    /// Write `value` at (label1, label2) and (label2, label1).
    pub fn assign(&mut self, label1: &str, label2: &str, value: Provenance) -> Result<()> {
        let p1 = self.position(label1)?;
        let p2 = self.position(label2)?;
        self.matrix[[p1, p2]] = value.code();
        self.matrix[[p2, p1]] = value.code();
        Ok(())
    }

    pub fn finish(self) -> CodeMatrix {
        self.matrix
    }
}
