//! Error type shared by every retrieval operation

use std::path::PathBuf;

/// Errors for tokenization, scoring, ranking, persistence and evaluation.
#[derive(thiserror::Error, Debug)]
pub enum RetrievalError {
    /// A required collection or string argument was empty.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A numeric argument was out of its accepted range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A term needed for scoring had no IDF entry.
    #[error("term not found in idf map: {0:?}")]
    TermNotFound(String),

    /// The query had no tokens left after stopword filtering.
    #[error("query has no terms after tokenization and stopword removal")]
    NoQueryTerms,

    /// Two rankings that must be compared position by position differ in length.
    #[error("rankings differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Rank correlation needs at least two items.
    #[error("rank correlation needs at least 2 items, got {0}")]
    TooFewItems(usize),

    /// A ranking listed the same document id twice.
    #[error("duplicate document id {0} in ranking")]
    DuplicateId(usize),

    #[error("failed to access index file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed index file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RetrievalError>;
