pub mod annotation;
pub mod config;
pub mod error;
pub mod event;
pub mod logger;
pub mod reporter;
pub mod runner;
pub mod stack;
pub mod summary;

// Re-export commonly used types
pub use error::{Result, RuciError};
