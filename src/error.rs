//! Error types for the sequence-tagging data pipeline.
//!
//! Every failure here is a local precondition violation raised
//! synchronously to the caller — nothing is retried or recovered
//! internally. Dataset construction is all-or-nothing: either a fully
//! valid set of datasets is returned, or setup fails before any dataset
//! object is handed back.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the data pipeline.
#[derive(Error, Debug)]
pub enum DataError {
    /// Requested dataset name is not in the registry
    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),

    /// Requested split name is not valid for the dataset
    #[error("invalid split '{split}' for {dataset}: expected one of {valid:?}")]
    InvalidSplit {
        dataset: String,
        split: String,
        valid: &'static [&'static str],
    },

    /// No vocabularies were supplied and 'train' was not requested,
    /// so there is nothing to build vocabularies from
    #[error("a vocabulary must be supplied when 'train' is not among the requested splits")]
    MissingTrainSplit,

    /// Supplied vocabulary count disagrees with the data's column count
    #[error("number of vocabularies ({vocabs}) must match the number of data columns ({columns})")]
    VocabColumnMismatch { vocabs: usize, columns: usize },

    /// A row's column count disagrees with the transform pipeline length
    #[error("row has {found} columns but the transform pipeline expects {expected}")]
    RowShapeMismatch { expected: usize, found: usize },

    /// Out-of-range item access — standard container contract
    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Vocabulary construction needs at least one row to infer the
    /// column count from
    #[error("cannot build vocabularies from an empty corpus")]
    EmptyCorpus,

    /// Token lookup failed on a vocabulary with no default index.
    /// Vocabularies built by this crate always carry a default index,
    /// so this only surfaces for externally supplied ones.
    #[error("token '{0}' not in vocabulary and no default index is set")]
    UnknownToken(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// A corpus file line that does not fit the column format
    #[error("malformed line {line} in {path}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for data pipeline operations.
pub type Result<T> = std::result::Result<T, DataError>;
