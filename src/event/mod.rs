pub mod stream;
pub mod types;

// Re-export commonly used types
pub use stream::EventStream;
pub use types::LifecycleEvent;
