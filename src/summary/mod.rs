pub mod types;

// Re-export commonly used types
pub use types::{ErrorRecord, FailureNode, GroupNode, RunCounts, RunSummary, TestNode};
