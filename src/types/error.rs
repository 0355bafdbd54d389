//! Error types for the TF-IDF core.

use thiserror::Error;

/// Errors raised by the TF-IDF core and its configuration layer.
#[derive(Debug, Error)]
pub enum TfidfError {
    /// The combiner was asked for a term the statement never counted.
    #[error("term {term:?} has no positive count in statement {statement}")]
    TermNotCounted { statement: usize, term: String },

    /// Statement index past the end of the corpus.
    #[error("statement index {index} out of range for corpus of {len}")]
    StatementOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or unparsable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for TfidfError {
    fn from(err: toml::de::Error) -> Self {
        TfidfError::Config(err.to_string())
    }
}

pub type TfidfResult<T> = Result<T, TfidfError>;
