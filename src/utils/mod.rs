//! Shared utilities

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{PlatformError, Result};
