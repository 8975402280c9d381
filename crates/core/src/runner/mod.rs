//! Batch pairing runs.

mod batch;
mod listing;
mod types;

pub use batch::BatchRunner;
pub use listing::read_listing;
pub use types::{RunError, RunSummary};
