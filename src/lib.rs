//! # Filewright
//!
//! File-system tools served over the Model Context Protocol.
//!
//! This meta crate re-exports the workspace members:
//!
//! - [`filewright_core`]: error taxonomy, `Tool` trait, configuration
//! - [`filewright_tools`]: walker, editor, JSON updater, inspector and the tool registry
//! - [`filewright_mcp`]: the MCP server and its transports
//!
//! ```rust
//! use filewright::{FilewrightConfig, InMemoryToolRegistry, ToolRegistry};
//!
//! let registry = InMemoryToolRegistry::standard(&FilewrightConfig::default());
//! let result = registry.dispatch("file_info", r#"{"path": "/definitely/missing"}"#.to_string());
//! assert!(result.unwrap().output().contains("\"exists\": false"));
//! ```

pub use filewright_core;
pub use filewright_mcp;
pub use filewright_tools;

pub use filewright_core::{ExecutionResult, FailureReason, FilewrightConfig, FsError, Tool};
pub use filewright_mcp::FilewrightServer;
pub use filewright_tools::{InMemoryToolRegistry, ToolRegistry};
