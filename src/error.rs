//! Error types for weblight

use thiserror::Error;

/// Result type alias for weblight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the classification path.
///
/// Classifying a line never fails; these cover rule construction from
/// user-supplied patterns, configuration files, and the binary's file I/O.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Cannot write configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Message(String),
}
