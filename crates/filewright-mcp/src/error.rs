//! MCP error types
//!
//! Server-level failures. Tool failures are not errors at this level: they
//! come back to the client as tool results flagged `is_error`.

use rmcp::ErrorData;
use thiserror::Error;

/// MCP operation result type
pub type McpResult<T> = Result<T, McpError>;

/// Errors that can occur while serving MCP requests
#[derive(Debug, Error)]
pub enum McpError {
    /// No tool registered under the requested name
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments could not be handed to the tool
    #[error("Invalid tool parameters: {0}")]
    InvalidParameters(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Transport setup or teardown failed
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Internal server error, e.g. a tool task that panicked
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl McpError {
    /// Whether the failure is the caller's fault rather than the server's.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            McpError::ToolNotFound(_)
                | McpError::InvalidParameters(_)
                | McpError::SerializationError(_)
        )
    }
}

impl From<McpError> for ErrorData {
    fn from(err: McpError) -> Self {
        if err.is_client_error() {
            ErrorData::invalid_params(err.to_string(), None)
        } else {
            ErrorData::internal_error(err.to_string(), None)
        }
    }
}
