//! Error types for rangeforge

use thiserror::Error;

/// Main error type for value range operations
#[derive(Debug, Error)]
pub enum ValueRangeError {
    /// A countable-only operation was invoked on an uncountable range,
    /// or an index was outside `0..size`
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A range was built from inconsistent bounds, step or members
    #[error("Construction error: {0}")]
    Construction(String),

    /// Size or index arithmetic exceeded the representable range
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type alias for value range operations
pub type Result<T> = std::result::Result<T, ValueRangeError>;
