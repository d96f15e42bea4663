//! Error types and exit codes for neograph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid solver parameters)
//! - 3: Data error (malformed graph document or weight matrix)

mod macros;

use thiserror::Error;

/// Exit codes for the neokruskal binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or solving a graph
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("bucket count must be at least 1 (got {bucket})")]
    InvalidBucketCount { bucket: usize },

    #[error("invalid weight range: min {min} must be finite and not exceed max {max}")]
    InvalidWeightRange { min: f64, max: f64 },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid weight matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("invalid graph document: {reason}")]
    InvalidDocument { reason: String },

    #[error("key is not registered in the disjoint set: {key}")]
    UnregisteredKey { key: String },

    // Generic failures (exit code 1)
    #[error("the queue is empty")]
    EmptyQueue,

    #[error("requested capacity {requested} is less than the element count {count}")]
    InvalidCapacity { requested: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a disjoint-set lookup on a key that was never registered
    pub fn unregistered_key(key: impl std::fmt::Debug) -> Self {
        GraphError::UnregisteredKey {
            key: format!("{:?}", key),
        }
    }

    /// Create an error for a malformed weight matrix
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        GraphError::InvalidMatrix {
            reason: reason.into(),
        }
    }

    /// Create an error for a graph document that parses but does not describe a graph
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        GraphError::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidBucketCount { .. }
            | GraphError::InvalidWeightRange { .. }
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::InvalidMatrix { .. }
            | GraphError::InvalidDocument { .. }
            | GraphError::UnregisteredKey { .. }
            | GraphError::Json(_)
            | GraphError::Toml(_) => ExitCode::Data,

            GraphError::EmptyQueue
            | GraphError::InvalidCapacity { .. }
            | GraphError::Io(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidBucketCount { .. } => "invalid_bucket_count",
            GraphError::InvalidWeightRange { .. } => "invalid_weight_range",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::InvalidMatrix { .. } => "invalid_matrix",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::UnregisteredKey { .. } => "unregistered_key",
            GraphError::EmptyQueue => "empty_queue",
            GraphError::InvalidCapacity { .. } => "invalid_capacity",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for neograph operations
pub type Result<T> = std::result::Result<T, GraphError>;
