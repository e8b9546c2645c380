//! Error types for lexlight

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for lexlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
///
/// The highlighting core never lets these escape to the caller: resource
/// problems degrade to empty data and pattern problems drop a single rule.
/// They surface only from configuration loading and the command line.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Malformed resource {resource}: {source}")]
    Malformed {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid resource name: {0}")]
    InvalidResourceName(String),

    #[error("Invalid pattern for rule {rule}: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Message(String),
}
