pub mod parser;

// Re-export commonly used types
pub use parser::{SourceLocation, StackTrace};
