//! Parser error types

use thiserror::Error;

/// Errors that can occur while parsing number or transform lists
///
/// Positions are byte offsets into the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that does not fit the grammar at this point
    #[error("unexpected character {found:?} at position {position}, expected {expected}")]
    UnexpectedChar {
        found: char,
        position: usize,
        expected: &'static str,
    },

    /// Input ended where more was required
    #[error("unexpected end of input at position {position}, expected {expected}")]
    UnexpectedEnd {
        position: usize,
        expected: &'static str,
    },

    /// A malformed or unrepresentable number
    #[error("invalid number {text:?} at position {position}")]
    InvalidNumber { text: String, position: usize },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
