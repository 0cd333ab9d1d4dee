//! Error types for lesson markup compilation.
//!
//! Only failures that concern the whole input end up here. Problems inside a
//! single slide are reported as [`Diagnostic`](crate::Diagnostic)s instead.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a compilation run.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an input or config file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The input contains no slide text at all (blank or comments only).
    #[error("Input is empty")]
    EmptyInput,

    /// The input exceeds the configured size bound.
    #[error("Input is too large: {len} bytes (limit is {max} bytes)")]
    InputTooLarge { len: usize, max: usize },

    /// The input bytes are not valid UTF-8 text.
    #[error("Input is not valid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
