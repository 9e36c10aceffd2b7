//! Error types for the detection-eval library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for detection-eval operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Error types that can occur while loading and evaluating detections.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while parsing a TOML configuration file.
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    /// A ground truth or prediction document is missing a required key,
    /// carries a non-numeric coordinate, or a non-finite value.
    #[error("Malformed input in {source_name}: {reason}")]
    MalformedInput { source_name: String, reason: String },

    /// A ground truth file has no corresponding prediction file.
    #[error("No prediction file found for {}", .ground_truth.display())]
    MissingPair { ground_truth: PathBuf },

    /// A directory the evaluation depends on does not exist.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Invalid IoU threshold.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

impl EvalError {
    /// Build a `MalformedInput` error for the given source.
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        EvalError::MalformedInput {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error only affects a single file pair.
    ///
    /// File-level errors are logged and skipped by the evaluator; anything
    /// else aborts the run.
    pub fn is_file_level(&self) -> bool {
        matches!(
            self,
            EvalError::MalformedInput { .. }
                | EvalError::MissingPair { .. }
                | EvalError::JsonError(_)
                | EvalError::IoError(_)
        )
    }
}
