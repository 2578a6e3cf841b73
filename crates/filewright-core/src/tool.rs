//! Tool trait and execution result types.
//!
//! Tools are the outermost boundary of the file operations: they accept
//! JSON-encoded arguments, call the typed core and return either rendered
//! output or a structured [`FailureReason`].

use crate::error::FsError;

/// Categorized failure reasons for tool execution.
///
/// This enum provides structured error information instead of plain strings,
/// making it easier to handle different failure types programmatically.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FailureReason {
    /// Invalid or malformed input provided to the tool
    InvalidInput {
        /// Description of what was invalid
        message: String,
    },
    /// Regular expression could not be compiled
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler diagnostic
        message: String,
    },
    /// Required path not found, or not of the expected kind
    NotFound {
        /// What was not found
        resource: String,
    },
    /// Permission denied by the operating system
    PermissionDenied {
        /// What operation was denied
        message: String,
    },
    /// Content could not be decoded as text or parsed as JSON
    DecodeError {
        /// Description of the decoding failure
        message: String,
    },
    /// I/O operation failed
    IoError {
        /// Description of the I/O failure
        message: String,
    },
    /// Internal tool error or unexpected state
    InternalError {
        /// Description of the internal error
        message: String,
    },
}

impl FailureReason {
    /// Get a human-readable error message
    pub fn message(&self) -> String {
        match self {
            FailureReason::InvalidInput { message } => format!("Invalid input: {}", message),
            FailureReason::InvalidPattern { pattern, message } => {
                format!("Invalid pattern '{}': {}", pattern, message)
            }
            FailureReason::NotFound { resource } => format!("Not found: {}", resource),
            FailureReason::PermissionDenied { message } => {
                format!("Permission denied: {}", message)
            }
            FailureReason::DecodeError { message } => format!("Decode error: {}", message),
            FailureReason::IoError { message } => format!("I/O error: {}", message),
            FailureReason::InternalError { message } => format!("Internal error: {}", message),
        }
    }

    /// Short category label, used as a structured logging field.
    pub fn category(&self) -> &'static str {
        match self {
            FailureReason::InvalidInput { .. } => "invalid_input",
            FailureReason::InvalidPattern { .. } => "invalid_pattern",
            FailureReason::NotFound { .. } => "not_found",
            FailureReason::PermissionDenied { .. } => "permission_denied",
            FailureReason::DecodeError { .. } => "decode_error",
            FailureReason::IoError { .. } => "io_error",
            FailureReason::InternalError { .. } => "internal_error",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<FsError> for FailureReason {
    fn from(err: FsError) -> Self {
        match err {
            FsError::NotFound { path } => FailureReason::NotFound {
                resource: path.display().to_string(),
            },
            FsError::NotADirectory { path } => FailureReason::NotFound {
                resource: format!("{} is not a directory", path.display()),
            },
            FsError::NotAFile { path } => FailureReason::NotFound {
                resource: format!("{} is not a regular file", path.display()),
            },
            FsError::InvalidPattern { pattern, message } => {
                FailureReason::InvalidPattern { pattern, message }
            }
            FsError::PermissionDenied { path } => FailureReason::PermissionDenied {
                message: path.display().to_string(),
            },
            FsError::InvalidInput { message } => FailureReason::InvalidInput { message },
            err @ (FsError::Decode { .. } | FsError::Json { .. }) => FailureReason::DecodeError {
                message: err.to_string(),
            },
            err @ FsError::Io { .. } => FailureReason::IoError {
                message: err.to_string(),
            },
        }
    }
}

/// The result of executing a tool.
///
/// `ExecutionResult` represents either successful execution with output
/// or failed execution with a structured failure reason.
#[derive(Debug, Clone)]
pub enum ExecutionResult {
    /// Tool executed successfully with the given rendered output.
    Success { output: String },

    /// Tool execution failed with a structured reason.
    Failure { reason: FailureReason },
}

impl ExecutionResult {
    /// Create a successful execution result.
    pub fn success(output: String) -> Self {
        ExecutionResult::Success { output }
    }

    /// Create a failed execution result with a structured reason.
    pub fn failed(reason: FailureReason) -> Self {
        ExecutionResult::Failure { reason }
    }

    /// Create a failed execution result for malformed tool arguments.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ExecutionResult::Failure {
            reason: FailureReason::InvalidInput {
                message: message.into(),
            },
        }
    }

    /// Check if the execution was successful.
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    /// Check if the execution failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, ExecutionResult::Failure { .. })
    }

    /// Get the output string (for success) or error message (for failure).
    pub fn output(&self) -> String {
        match self {
            ExecutionResult::Success { output } => output.clone(),
            ExecutionResult::Failure { reason } => reason.message(),
        }
    }

    /// Get the failure reason if available.
    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            ExecutionResult::Success { .. } => None,
            ExecutionResult::Failure { reason } => Some(reason),
        }
    }

    /// Convert to a Result type for easier error handling.
    pub fn into_result(self) -> Result<String, FailureReason> {
        match self {
            ExecutionResult::Success { output } => Ok(output),
            ExecutionResult::Failure { reason } => Err(reason),
        }
    }
}

impl From<FsError> for ExecutionResult {
    fn from(err: FsError) -> Self {
        ExecutionResult::Failure { reason: err.into() }
    }
}

/// Trait defining a file-system capability callable by name.
///
/// # Example
///
/// ```rust
/// use filewright_core::tool::{ExecutionResult, Tool};
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     fn name(&self) -> &str {
///         "echo"
///     }
///
///     fn call(&self, input: String) -> ExecutionResult {
///         ExecutionResult::success(input)
///     }
/// }
///
/// assert!(EchoTool.call("hi".to_string()).is_success());
/// ```
pub trait Tool: Send + Sync {
    /// Returns the unique name identifier for this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description of the tool.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the JSON Schema for the tool's arguments, if known.
    fn input_schema(&self) -> Option<serde_json::Value> {
        None
    }

    /// Execute the tool with JSON-encoded arguments.
    ///
    /// Implementations never panic on bad input; malformed arguments come
    /// back as `FailureReason::InvalidInput`.
    fn call(&self, input: String) -> ExecutionResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_failure_reason_from_fs_error() {
        let reason: FailureReason = FsError::NotADirectory {
            path: PathBuf::from("/tmp/file.txt"),
        }
        .into();
        assert_eq!(reason.category(), "not_found");
        assert!(reason.message().contains("/tmp/file.txt is not a directory"));

        let reason: FailureReason = FsError::invalid_pattern("[a-", "unclosed class").into();
        assert!(matches!(reason, FailureReason::InvalidPattern { .. }));

        let reason: FailureReason = FsError::Decode {
            path: PathBuf::from("bin.dat"),
            message: "invalid utf-8 sequence".to_string(),
        }
        .into();
        assert_eq!(reason.category(), "decode_error");
        assert!(reason.message().contains("bin.dat"));
    }

    #[test]
    fn test_failure_reason_serializes_tagged() {
        let reason = FailureReason::NotFound {
            resource: "/nope".to_string(),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["type"], "not_found");
        assert_eq!(json["resource"], "/nope");
    }

    #[test]
    fn test_execution_result_accessors() {
        let ok = ExecutionResult::success("done".to_string());
        assert!(ok.is_success());
        assert_eq!(ok.output(), "done");
        assert!(ok.failure_reason().is_none());

        let err = ExecutionResult::invalid_input("missing field `path`");
        assert!(err.is_failure());
        assert_eq!(err.output(), "Invalid input: missing field `path`");
        assert!(err.into_result().is_err());
    }
}
