//! Core data structures for signatures, adjacency and alignment matrices

use crate::error::{AlignError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Number of graphlet orbits counted per node.
pub const ORBIT_COUNT: usize = 73;

/// Dense G-rows by H-columns matrix of alignment costs. Lower is better.
pub type CostMatrix = Array2<f64>;

/// Square matrix of edge codes produced by the bridge and merge builders.
pub type CodeMatrix = Array2<u8>;

/// Graphlet degree vector of a single node. Index 0 is the node's degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct Signature([u32; ORBIT_COUNT]);

impl Signature {
    pub fn new(counts: [u32; ORBIT_COUNT]) -> Self {
        Signature(counts)
    }

    /// Orbit 0 counts the edges touching the node.
    pub fn degree(&self) -> u32 {
        self.0[0]
    }

    pub fn counts(&self) -> &[u32; ORBIT_COUNT] {
        &self.0
    }
}

impl TryFrom<&[u32]> for Signature {
    type Error = AlignError;

    fn try_from(row: &[u32]) -> Result<Self> {
        let counts: [u32; ORBIT_COUNT] = row
            .try_into()
            .map_err(|_| AlignError::SignatureLength { len: row.len() })?;
        Ok(Signature(counts))
    }
}

impl TryFrom<Vec<u32>> for Signature {
    type Error = AlignError;

    fn try_from(row: Vec<u32>) -> Result<Self> {
        Signature::try_from(row.as_slice())
    }
}

impl From<Signature> for Vec<u32> {
    fn from(sig: Signature) -> Self {
        sig.0.to_vec()
    }
}

/// Convert the raw GDV rows of one graph, reporting the first malformed node.
pub fn signatures_from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Vec<Signature>> {
    rows.iter()
        .enumerate()
        .map(|(node, row)| {
            let row = row.as_ref();
            Signature::try_from(row).map_err(|_| AlignError::MalformedSignature {
                node,
                len: row.len(),
            })
        })
        .collect()
}

/// Square adjacency matrix. Positive entries are edges; the diagonal is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<u32>", into = "Array2<u32>")]
pub struct AdjacencyMatrix(Array2<u32>);

impl AdjacencyMatrix {
    pub fn new(matrix: Array2<u32>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(AlignError::NotSquare { rows, cols });
        }
        Ok(AdjacencyMatrix(matrix))
    }

    /// Build from row vectors, as handed over by a CSV reader.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(AlignError::NotSquare {
                rows: n,
                cols: bad.len(),
            });
        }
        let matrix = Array2::from_shape_vec((n, n), rows.concat())?;
        Ok(AdjacencyMatrix(matrix))
    }

    pub fn node_count(&self) -> usize {
        self.0.nrows()
    }

    /// Self-loops never count as edges.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i != j && self.0[[i, j]] > 0
    }

    /// Neighbours of `node` in index order, excluding the node itself.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count()).filter(move |&other| self.has_edge(node, other))
    }

    pub fn as_array(&self) -> &Array2<u32> {
        &self.0
    }
}

impl TryFrom<Array2<u32>> for AdjacencyMatrix {
    type Error = AlignError;

    fn try_from(matrix: Array2<u32>) -> Result<Self> {
        AdjacencyMatrix::new(matrix)
    }
}

impl From<AdjacencyMatrix> for Array2<u32> {
    fn from(adj: AdjacencyMatrix) -> Self {
        adj.0
    }
}

/// Whether an alignment score counts as an accepted match under `gamma`.
pub fn accepts(score: f64, gamma: f64) -> bool {
    score > 0.0 && score >= gamma
}

/// G-rows by H-columns alignment scores in [0, 1], as returned by an aligner.
///
/// Nothing forces a row or column to hold a single accepted entry. Every
/// consumer takes the first accepted entry by scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlignmentMatrix(Array2<f64>);

impl AlignmentMatrix {
    pub fn new(scores: Array2<f64>) -> Self {
        AlignmentMatrix(scores)
    }

    pub fn dim(&self) -> (usize, usize) {
        self.0.dim()
    }

    pub fn score(&self, g: usize, h: usize) -> f64 {
        self.0[[g, h]]
    }

    pub fn is_aligned(&self, g: usize, h: usize, gamma: f64) -> bool {
        accepts(self.0[[g, h]], gamma)
    }

    /// First accepted column of row `g`, scanning left to right.
    pub fn first_match(&self, g: usize, gamma: f64) -> Option<usize> {
        self.0.row(g).iter().position(|&score| accepts(score, gamma))
    }

    /// Fail unless the matrix is `rows` by `cols`.
    pub fn ensure_dim(&self, rows: usize, cols: usize) -> Result<()> {
        if self.dim() != (rows, cols) {
            return Err(AlignError::DimensionMismatch {
                what: "alignment matrix",
                expected: (rows, cols),
                found: self.dim(),
            });
        }
        Ok(())
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.0
    }
}

/// Which input graph(s) contributed an edge of the merged graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Provenance {
    None = 0,
    GOnly = 1,
    HOnly = 2,
    Both = 3,
}

impl Provenance {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Provenance::None),
            1 => Some(Provenance::GOnly),
            2 => Some(Provenance::HOnly),
            3 => Some(Provenance::Both),
            _ => None,
        }
    }
}
