//! # Standard Tool Library
//!
//! The file-system tools served by Filewright, each a [`Tool`] that parses
//! JSON arguments, runs the typed operation and renders the outcome.
//!
//! ## Usage
//!
//! ```rust
//! use filewright_core::SearchDefaults;
//! use filewright_tools::{FindFilesTool, InMemoryToolRegistry, ViewFileTool};
//! use std::sync::Arc;
//!
//! let registry = InMemoryToolRegistry::new()
//!     .with_tool(Arc::new(FindFilesTool::new(SearchDefaults::default())))
//!     .with_tool(Arc::new(ViewFileTool::new()));
//! assert_eq!(registry.len(), 2);
//! ```
//!
//! [`Tool`]: filewright_core::Tool

/// Regex substitution and JSON merge tools
pub mod edit;
/// View, read, write, list and stat tools
pub mod file;
/// Directory walker tool
pub mod search;

pub use edit::{UpdateJsonTool, UpdateParameterTool};
pub use file::{FileInfoTool, ListDirectoryTool, ModifyFileTool, ReadFileTool, ViewFileTool};
pub use search::FindFilesTool;

use filewright_core::ExecutionResult;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Decode a tool's JSON arguments, turning serde errors into `InvalidInput`.
pub(crate) fn parse_args<T: DeserializeOwned>(input: &str) -> Result<T, ExecutionResult> {
    serde_json::from_str(input).map_err(|e| ExecutionResult::invalid_input(e.to_string()))
}

/// JSON Schema of an argument type, as advertised to MCP clients.
pub(crate) fn schema_of<T: JsonSchema>() -> Option<serde_json::Value> {
    serde_json::to_value(schemars::schema_for!(T)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct Probe {
        path: String,
    }

    #[test]
    fn test_parse_args_reports_missing_fields() {
        let err = parse_args::<Probe>("{}").unwrap_err();
        assert!(err.output().contains("missing field `path`"));

        let ok = parse_args::<Probe>(r#"{"path":"/tmp"}"#).unwrap();
        assert_eq!(ok.path, "/tmp");
    }

    #[test]
    fn test_schema_lists_properties() {
        let schema = schema_of::<Probe>().unwrap();
        assert!(schema["properties"]["path"].is_object());
    }
}
