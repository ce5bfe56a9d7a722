//! Error types and exit codes for lexis
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown language)
//! - 3: Data error (unreadable input, invalid config)
//!
//! [`LexisError::FaultySlice`] and the among-table variants describe defects in a rule
//! program rather than bad input. The stemmer façade swallows slice faults per word
//! (logging a warning) so they never reach a caller as a failure.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable input or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during lexis operations
#[derive(Error, Debug)]
pub enum LexisError {
    // Rule program defects
    #[error("faulty slice operation: bra={bra}, ket={ket}, limit={limit}")]
    FaultySlice { bra: usize, ket: usize, limit: usize },

    #[error("among table {table}: entry {index} has a back-link that does not terminate")]
    BrokenAmongChain { table: String, index: usize },

    #[error("among table {table}: entry {index} is out of order")]
    UnsortedAmongTable { table: String, index: usize },

    // Usage errors (exit code 2)
    #[error(
        "unknown language: {0} (expected one of: {supported})",
        supported = crate::stemmer::Language::supported_names()
    )]
    UnknownLanguage(String),

    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl LexisError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        LexisError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LexisError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// True for errors that indicate a defect in a rule program
    pub fn is_program_defect(&self) -> bool {
        matches!(
            self,
            LexisError::FaultySlice { .. }
                | LexisError::BrokenAmongChain { .. }
                | LexisError::UnsortedAmongTable { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LexisError::UnknownLanguage(_)
            | LexisError::UnknownFormat(_)
            | LexisError::UsageError(_)
            | LexisError::InvalidValue { .. } => ExitCode::Usage,

            LexisError::InvalidConfig { .. } | LexisError::Toml(_) => ExitCode::Data,

            LexisError::FaultySlice { .. }
            | LexisError::BrokenAmongChain { .. }
            | LexisError::UnsortedAmongTable { .. }
            | LexisError::Io(_)
            | LexisError::Json(_)
            | LexisError::FailedOperationWithTarget { .. }
            | LexisError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            LexisError::FaultySlice { .. } => "faulty_slice",
            LexisError::BrokenAmongChain { .. } => "broken_among_chain",
            LexisError::UnsortedAmongTable { .. } => "unsorted_among_table",
            LexisError::UnknownLanguage(_) => "unknown_language",
            LexisError::UnknownFormat(_) => "unknown_format",
            LexisError::UsageError(_) => "usage_error",
            LexisError::InvalidValue { .. } => "invalid_value",
            LexisError::InvalidConfig { .. } => "invalid_config",
            LexisError::Io(_) => "io_error",
            LexisError::Json(_) => "json_error",
            LexisError::Toml(_) => "toml_error",
            LexisError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            LexisError::Other(_) => "other",
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

/// Result type alias for lexis operations
pub type Result<T> = std::result::Result<T, LexisError>;
