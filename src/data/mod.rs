pub mod query;
pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use query::{CategoryCount, payload_outcome_rows, success_counts_by_site};
pub use source::{LaunchDataset, LaunchRecord};
pub use stats::PayloadBounds;
