// Error kinds surfaced by the recommendation pipeline.
//
// Every failure is local to one request. The HTTP layer maps each kind to a
// status code; the CLI just prints the message.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecommendError {
    /// The ingestion file or pipeline input artifact does not exist.
    #[error("data file '{}' not found", .0.display())]
    DataSourceNotFound(PathBuf),

    /// A required column is missing from the pipeline input artifact.
    #[error("required column '{column}' not found in the preprocessed data")]
    SchemaViolation { column: String },

    /// Anything else: CSV parse failures, degenerate vector space fits.
    #[error("{0}")]
    Processing(String),
}

impl RecommendError {
    pub fn processing(message: impl Into<String>) -> Self {
        Self::Processing(message.into())
    }

    /// True for the "not found" kind callers report separately (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DataSourceNotFound(_))
    }
}

impl From<csv::Error> for RecommendError {
    fn from(err: csv::Error) -> Self {
        Self::Processing(format!("CSV error: {err}"))
    }
}

impl From<std::io::Error> for RecommendError {
    fn from(err: std::io::Error) -> Self {
        Self::Processing(format!("I/O error: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
