//! File-system error types.
//!
//! Every core operation returns `FsResult<T>`. Errors stay typed until the
//! tool boundary, where they are converted into a
//! [`FailureReason`](crate::tool::FailureReason).

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for file-system operations.
pub type FsResult<T> = Result<T, FsError>;

/// Errors raised by the walker, editor and the other file operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path does not exist.
    #[error("Path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Path exists but is not a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Path exists but is not a regular file.
    #[error("Not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },

    /// Regular expression failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// File content is not valid UTF-8.
    #[error("Cannot decode '{}' as UTF-8 text: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    /// Access to the path was refused by the operating system.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Request arguments were rejected before touching the file system.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// File content is not a valid JSON document.
    #[error("Invalid JSON in '{}': {message}", .path.display())]
    Json { path: PathBuf, message: String },

    /// Any other I/O failure.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classify an `io::Error` raised while operating on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Create an `InvalidPattern` error from a compile failure.
    pub fn invalid_pattern(pattern: &str, err: impl std::fmt::Display) -> Self {
        FsError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }

    /// Create an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FsError::InvalidInput {
            message: message.into(),
        }
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FsError::NotFound { path }
            | FsError::NotADirectory { path }
            | FsError::NotAFile { path }
            | FsError::Decode { path, .. }
            | FsError::PermissionDenied { path }
            | FsError::Json { path, .. }
            | FsError::Io { path, .. } => Some(path),
            FsError::InvalidPattern { .. } | FsError::InvalidInput { .. } => None,
        }
    }
}
