//! Error types for the highlighting bridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Bridge error types
///
/// Only `UnknownLanguage` can come out of a render call; everything else is
/// raised while building a bridge from its configuration.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("No lexer for language: {0}")]
    UnknownLanguage(String),

    #[error("No style named: {0}")]
    UnknownStyle(String),

    #[error("Unknown token category: {0}")]
    UnknownToken(String),

    #[error("Invalid style attribute: {0}")]
    InvalidStyle(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Syntax definitions: {0}")]
    Syntax(String),
}
