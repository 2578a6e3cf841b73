//! # Filewright Core
//!
//! Core traits and types shared by the Filewright crates: the typed
//! file-system error taxonomy, the `Tool` trait with its execution result
//! types, and server configuration.

pub mod config;
pub mod error;
pub mod tool;

pub use config::{ConfigError, EditSettings, FilewrightConfig, SearchDefaults, ServerSettings, Transport};
pub use error::{FsError, FsResult};
pub use tool::{ExecutionResult, FailureReason, Tool};
