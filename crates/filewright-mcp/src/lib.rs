//! # Filewright MCP
//!
//! Exposes the Filewright tool registry as a Model Context Protocol server,
//! over stdio or streamable HTTP.
//!
//! ## Example
//!
//! ```rust,no_run
//! use filewright_core::FilewrightConfig;
//! use filewright_mcp::FilewrightServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FilewrightConfig::load(None)?;
//!     FilewrightServer::from_config(&config).serve_stdio().await?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod error;
pub mod http;
pub mod server;

pub use adapter::ToolAdapter;
pub use error::{McpError, McpResult};
pub use http::{MCP_PATH, router, serve_http, shutdown_signal};
pub use server::FilewrightServer;
