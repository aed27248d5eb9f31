pub mod github;
pub mod registry;
pub mod sink;
pub mod summary;

// Re-export commonly used types
pub use github::GithubReporter;
pub use registry::ReporterRegistry;
pub use sink::{ConsoleSink, LifecycleSink, MemorySink, OutputSink};
pub use summary::SummaryReporter;
