//! Error types for the autolysis library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for autolysis operations.
#[derive(Debug, Error)]
pub enum AutolysisError {
    /// The dataset path does not exist.
    #[error("Dataset file {} not found", .0.display())]
    NotFound(PathBuf),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing CSV/TSV data.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// The bearer token variable is unset or empty.
    #[error("{0} environment variable is not set")]
    MissingCredential(String),

    /// Transport-level failure talking to the remote API.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The remote API answered with a non-success status.
    #[error("{status} - {body}")]
    Api { status: u16, body: String },

    /// Failure while drawing or encoding a chart.
    #[error("Failed to render {file}: {message}")]
    Render { file: String, message: String },

    /// Failure writing the Markdown report.
    #[error("Failed to write report '{path}': {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse grouping of errors used to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing, unreadable or unparsable dataset.
    Input,
    /// Missing bearer token.
    Credential,
    /// Transport failure or non-success response from the remote API.
    Remote,
    /// Chart rendering failure.
    Rendering,
    /// Report could not be written.
    Output,
}

impl AutolysisError {
    /// The category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AutolysisError::NotFound(_)
            | AutolysisError::Io { .. }
            | AutolysisError::Parse { .. }
            | AutolysisError::Csv(_)
            | AutolysisError::EmptyData(_) => ErrorCategory::Input,
            AutolysisError::MissingCredential(_) => ErrorCategory::Credential,
            AutolysisError::Http(_) | AutolysisError::Api { .. } | AutolysisError::Json(_) => {
                ErrorCategory::Remote
            }
            AutolysisError::Render { .. } => ErrorCategory::Rendering,
            AutolysisError::Report { .. } => ErrorCategory::Output,
        }
    }

    /// Whether the run must stop on this error.
    pub fn is_fatal(&self) -> bool {
        self.category() != ErrorCategory::Output
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() { 1 } else { 0 }
    }
}

/// Result type alias for autolysis operations.
pub type Result<T> = std::result::Result<T, AutolysisError>;
