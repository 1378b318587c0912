//! Error types for fixture loading and normalisation.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while normalising raw fixture records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormaliseError {
    /// The epoch milliseconds value cannot be represented as a date.
    #[error("timestamp {millis} is outside the supported date range")]
    TimestampOutOfRange {
        /// Offending epoch milliseconds value.
        millis: i64,
    },

    /// A comment refers to an article title that was never inserted.
    #[error("comment refers to unknown article title '{title}'")]
    UnknownArticleTitle {
        /// Title carried in the comment's `belongs_to` field.
        title: String,
    },
}

/// Failures raised while reading a fixture directory.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The fixture directory or one of its files could not be read.
    #[error("failed to read fixture '{path}': {source}")]
    Read {
        /// Path of the directory or file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is not valid JSON for the expected record shape.
    #[error("invalid fixture JSON in '{path}': {source}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The requested environment name is not recognised.
    #[error("unknown seed environment '{name}', expected 'test' or 'development'")]
    UnknownEnvironment {
        /// Name that failed to parse.
        name: String,
    },
}
