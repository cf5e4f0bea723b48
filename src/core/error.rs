//! Error types for the mindgauge shell.
//!
//! The scoring pipeline itself is total and never fails: absent input
//! defaults to zero or empty. These errors belong to the CLI boundary
//! (reading score files, configuration, writing output).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using mindgauge's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the scoring engine.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading a score file or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Score file not found.
    #[error("Score file not found: {path}")]
    ScoreFileNotFound { path: PathBuf },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("bad origin");
        assert_eq!(err.to_string(), "Configuration error: bad origin");

        let err = Error::ScoreFileNotFound {
            path: PathBuf::from("score.json"),
        };
        assert_eq!(err.to_string(), "Score file not found: score.json");
    }
}
