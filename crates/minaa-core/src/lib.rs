//! MINAA core: signatures, alignment matrices and run parameters

pub mod alignment;
pub mod error;
pub mod model;
pub mod params;


pub use alignment::{AlignedPair, AlignmentIndex};
pub use error::{AlignError, Result};
pub use model::{
    accepts, signatures_from_rows, AdjacencyMatrix, AlignmentMatrix, CodeMatrix, CostMatrix,
    Provenance, Signature, ORBIT_COUNT,
};
pub use params::AlignParams;
