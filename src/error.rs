//! Error types for the card formatting layer.
//!
//! Only date parsing can fail inside the pure formatters; everything else in
//! [`CardError`] comes from the edges (reading input files, loading config,
//! building links).

use thiserror::Error;

/// A date value that could not be turned into a calendar date.
///
/// The offending input is kept as text so the rendering layer can log it
/// before choosing its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date: {input}")]
pub struct InvalidDateError {
    pub input: String,
}

impl InvalidDateError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Errors surfaced by the card pipeline outside the pure formatters.
#[derive(Debug, Error)]
pub enum CardError {
    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed config YAML: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Invalid URL '{input}': {source}")]
    Url {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, CardError>;
