//! Error taxonomy for contract violations

use thiserror::Error;

/// Caller contract violations. None of these are recoverable by substitution.
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("signature must have 73 orbit counts, got {len}")]
    SignatureLength { len: usize },

    #[error("signature of node {node} must have 73 orbit counts, got {len}")]
    MalformedSignature { node: usize, len: usize },

    #[error("{what} must be {expected:?}, got {found:?}")]
    DimensionMismatch {
        what: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("{graph} has {nodes} nodes but {labels} labels")]
    LabelCount {
        graph: &'static str,
        nodes: usize,
        labels: usize,
    },

    #[error("label `{0}` is not in the merged vocabulary")]
    LabelNotFound(String),

    #[error("{name} must be in range [0, 1], got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid parameter file: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, AlignError>;
