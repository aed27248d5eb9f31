pub mod dispatcher;

// Re-export commonly used types
pub use dispatcher::{EventDispatcher, RunOutcome, run, run_with_dispatcher};
