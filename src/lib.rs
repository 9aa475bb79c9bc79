//! MINAA network alignment core
//!
//! Topological (GDV) cost matrices, cost blending, and bridged/merged views
//! of two graphs under an alignment. Reading and writing files, argument
//! parsing and the aligner itself belong to the caller.

pub mod pipeline;

pub use minaa_core::{
    AdjacencyMatrix, AlignError, AlignParams, AlignedPair, AlignmentIndex, AlignmentMatrix,
    CodeMatrix, CostMatrix, Provenance, Signature, ORBIT_COUNT,
};
pub use minaa_cost::{build_cost_matrix, combine, normalize};
pub use minaa_merge::{bridge, merge, merge_graphs, merge_labels, MergedGraph};
pub use pipeline::{run, Aligner, AlignmentRun, GraphInput};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. `verbose` switches to debug level.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = format!("minaa={log_level},minaa_core={log_level},minaa_cost={log_level},minaa_merge={log_level}");
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
