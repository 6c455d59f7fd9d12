//! Graphics error types

use std::io;

use fixpaint_core::CoreError;
use fixpaint_parser::ParseError;
use thiserror::Error;

/// Errors that can occur when creating or driving a [`Graphics`](crate::Graphics)
#[derive(Error, Debug)]
pub enum GraphicsError {
    /// Invalid dimensions or buffer sizes
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Malformed transform or number list
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// `prepare` called on a surface that is already prepared
    #[error("graphics surface is already prepared")]
    AlreadyPrepared,

    /// Configuration file could not be parsed
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// IO error when reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for graphics operations
pub type Result<T> = std::result::Result<T, GraphicsError>;
