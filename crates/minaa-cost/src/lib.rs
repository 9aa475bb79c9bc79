//! Topological cost engine and cost combiner
//!
//! Scores every G node against every H node from their graphlet degree
//! vectors, and blends the result with optional biological costs.

pub mod combine;
pub mod orbit;
pub mod signature;


pub use combine::{combine, normalize, resolve_beta};
pub use orbit::{total_weight, weight};
pub use signature::{build_cost_matrix, cost, distance, max_degree, similarity};
