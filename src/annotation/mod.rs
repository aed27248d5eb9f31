pub mod escape;
pub mod message;

// Re-export commonly used types
pub use escape::{escape_data, escape_property};
pub use message::AnnotationMessage;
