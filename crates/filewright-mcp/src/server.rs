//! MCP server exposing the Filewright tools

use crate::adapter::ToolAdapter;
use crate::error::{McpError, McpResult};
use filewright_core::FilewrightConfig;
use filewright_tools::InMemoryToolRegistry;
use filewright_tools::standard::edit::{UpdateJsonArgs, UpdateParameterArgs};
use filewright_tools::standard::file::{ModifyFileArgs, PathArgs};
use filewright_tools::standard::search::FindFilesArgs;
use rmcp::{
    ErrorData, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info};

const INSTRUCTIONS: &str = "File-system tools: find files by name, view or read files, \
replace file content, substitute regex matches in a file, merge fields into JSON files, \
list directories and stat paths. Overwriting writes keep a backup copy next to the file \
unless update_parameter is called with backup=false.";

/// MCP service backed by a tool registry.
///
/// Cloning is cheap; the HTTP transport creates one clone per session.
#[derive(Clone)]
pub struct FilewrightServer {
    registry: Arc<InMemoryToolRegistry>,
    name: String,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FilewrightServer {
    pub fn new(registry: InMemoryToolRegistry, name: impl Into<String>) -> Self {
        let mut tool_router = Self::tool_router();
        for (tool_name, route) in tool_router.map.iter_mut() {
            if let Some(tool) = registry.get_tool(tool_name) {
                route.attr.description = Some(Cow::Owned(tool.description().to_string()));
            }
        }

        Self {
            registry: Arc::new(registry),
            name: name.into(),
            tool_router,
        }
    }

    /// Server with the standard tools configured from `config`.
    pub fn from_config(config: &FilewrightConfig) -> Self {
        Self::new(
            InMemoryToolRegistry::standard(config),
            config.server.name.clone(),
        )
    }

    pub fn registry(&self) -> &InMemoryToolRegistry {
        &self.registry
    }

    async fn invoke<A: Serialize>(&self, name: &str, args: &A) -> Result<CallToolResult, ErrorData> {
        debug!(tool = name, "MCP tool call");
        let tool = self
            .registry
            .get_tool(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
        Ok(ToolAdapter::new(tool).call(args).await?)
    }

    #[tool]
    async fn find_files(
        &self,
        Parameters(args): Parameters<FindFilesArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("find_files", &args).await
    }

    #[tool]
    async fn view_file(
        &self,
        Parameters(args): Parameters<PathArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("view_file", &args).await
    }

    #[tool]
    async fn read_file(
        &self,
        Parameters(args): Parameters<PathArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("read_file", &args).await
    }

    #[tool]
    async fn modify_file(
        &self,
        Parameters(args): Parameters<ModifyFileArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("modify_file", &args).await
    }

    #[tool]
    async fn update_parameter(
        &self,
        Parameters(args): Parameters<UpdateParameterArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("update_parameter", &args).await
    }

    #[tool]
    async fn update_json(
        &self,
        Parameters(args): Parameters<UpdateJsonArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("update_json", &args).await
    }

    #[tool]
    async fn list_directory(
        &self,
        Parameters(args): Parameters<PathArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("list_directory", &args).await
    }

    #[tool]
    async fn file_info(
        &self,
        Parameters(args): Parameters<PathArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        self.invoke("file_info", &args).await
    }
}

#[tool_handler]
impl ServerHandler for FilewrightServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

impl FilewrightServer {
    /// Serve via stdio (stdin/stdout) until the client disconnects.
    ///
    /// Nothing else may write to stdout while this runs.
    pub async fn serve_stdio(self) -> McpResult<()> {
        info!(
            server = %self.name,
            version = env!("CARGO_PKG_VERSION"),
            tools = self.registry.len(),
            "Starting MCP server on stdio"
        );

        let service = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| McpError::TransportError(e.to_string()))?;

        let reason = service
            .waiting()
            .await
            .map_err(|e| McpError::InternalError(e.to_string()))?;

        info!(reason = ?reason, "MCP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_matches_registry() {
        let server = FilewrightServer::from_config(&FilewrightConfig::default());

        let mut routed: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        routed.sort();

        assert_eq!(routed, server.registry().tool_names());
    }

    #[test]
    fn test_descriptions_come_from_registry() {
        let server = FilewrightServer::from_config(&FilewrightConfig::default());

        for routed in server.tool_router.list_all() {
            let tool = server.registry().get_tool(&routed.name).unwrap();
            assert_eq!(routed.description.as_deref(), Some(tool.description()));
        }
    }

    #[test]
    fn test_instructions_do_not_promise_unconditional_backups() {
        let info = FilewrightServer::from_config(&FilewrightConfig::default()).get_info();
        let instructions = info.instructions.unwrap();
        assert!(!instructions.contains("Every write keeps a backup"));
        assert!(instructions.contains("backup=false"));
    }

    #[test]
    fn test_server_info() {
        let server = FilewrightServer::new(InMemoryToolRegistry::new(), "custom");
        let info = server.get_info();

        assert_eq!(info.server_info.name, "custom");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn test_unknown_registry_tool_is_protocol_error() {
        let server = FilewrightServer::new(InMemoryToolRegistry::new(), "empty");
        let err = server
            .find_files(Parameters(FindFilesArgs {
                root: "/".to_string(),
                pattern: None,
                literal: false,
                case_insensitive: false,
                extension: None,
                max_depth: None,
                max_results: None,
            }))
            .await
            .unwrap_err();

        assert!(err.message.contains("Tool not found: find_files"));
    }
}
