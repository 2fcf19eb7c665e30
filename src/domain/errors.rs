//! Domain errors for the evaluation harness.
//!
//! Only fatal conditions live here. A failed request against the service under
//! test is data, carried by [`CallOutcome`](super::models::CallOutcome), and never
//! surfaces as a [`HarnessError`].

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a dataset generation or a run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Dataset not found: {}. Run `earnings-eval generate` first", .path.display())]
    DatasetMissing { path: PathBuf },

    #[error("Dataset at {} is malformed: {reason}", .path.display())]
    DatasetMalformed { path: PathBuf, reason: String },

    #[error("Duplicate QA item id in dataset: {0}")]
    DuplicateItemId(String),

    #[error("Failed to write dataset to {}: {source}", .path.display())]
    DatasetWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot prepare output file {}: {source}", .path.display())]
    OutputPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append record to {}: {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

pub type HarnessResult<T> = Result<T, HarnessError>;

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::Serialization(err.to_string())
    }
}
