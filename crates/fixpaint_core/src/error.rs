//! Core error types

use thiserror::Error;

/// Errors raised for structural misuse of the core API
///
/// Numeric degeneracy during rendering (singular matrices, zero-length
/// segments, degenerate dash patterns) never produces one of these; it falls
/// back silently instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A width or height that was zero, negative or too large
    #[error("invalid {what} dimension: {value}")]
    InvalidDimension { what: &'static str, value: i64 },

    /// A pixel buffer whose length does not match its declared size
    #[error("buffer of {actual} pixels does not match {width}x{height}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
