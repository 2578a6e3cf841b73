use crate::standard::{
    FileInfoTool, FindFilesTool, ListDirectoryTool, ModifyFileTool, ReadFileTool,
    UpdateJsonTool, UpdateParameterTool, ViewFileTool,
};
use filewright_core::{ExecutionResult, FilewrightConfig, Tool};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Trait for looking up and dispatching tool calls by name.
pub trait ToolRegistry {
    /// Execute the named tool with JSON-encoded arguments.
    ///
    /// Returns `None` if no tool is registered under `name`.
    fn dispatch(&self, name: &str, input: String) -> Option<ExecutionResult>;

    /// Dispatch, with an unknown tool reported as an error.
    fn try_dispatch(&self, name: &str, input: String) -> Result<ExecutionResult, String> {
        self.dispatch(name, input)
            .ok_or_else(|| format!("Tool not found: {}", name))
    }
}

/// In-memory tool registry for local tool storage and dispatch.
///
/// Tools are keyed by their own [`Tool::name`], so iteration order is the
/// sorted tool name order.
///
/// # Example
///
/// ```rust
/// use filewright_core::{ExecutionResult, Tool};
/// use filewright_tools::{InMemoryToolRegistry, ToolRegistry};
/// use std::sync::Arc;
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     fn name(&self) -> &str { "echo" }
///     fn call(&self, input: String) -> ExecutionResult {
///         ExecutionResult::success(input)
///     }
/// }
///
/// let registry = InMemoryToolRegistry::new().with_tool(Arc::new(EchoTool));
/// let result = registry.dispatch("echo", "hello".to_string()).unwrap();
/// assert_eq!(result.output(), "hello");
/// ```
#[derive(Clone, Default)]
pub struct InMemoryToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl InMemoryToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every standard tool, configured from `config`.
    pub fn standard(config: &FilewrightConfig) -> Self {
        let suffix = config.edit.backup_suffix.as_str();
        Self::new()
            .with_tool(Arc::new(FindFilesTool::new(config.search)))
            .with_tool(Arc::new(ViewFileTool::new()))
            .with_tool(Arc::new(ReadFileTool::new()))
            .with_tool(Arc::new(ModifyFileTool::new(suffix)))
            .with_tool(Arc::new(UpdateParameterTool::new(suffix)))
            .with_tool(Arc::new(UpdateJsonTool::new(suffix)))
            .with_tool(Arc::new(ListDirectoryTool::new()))
            .with_tool(Arc::new(FileInfoTool::new()))
    }

    /// Add a tool using the builder pattern. A tool with the same name is replaced.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.register(tool);
        self
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn tools(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.values()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolRegistry for InMemoryToolRegistry {
    fn dispatch(&self, name: &str, input: String) -> Option<ExecutionResult> {
        let tool = self.tools.get(name)?;
        let result = tool.call(input);

        match result.failure_reason() {
            Some(reason) => debug!(tool = name, category = reason.category(), "Tool failed"),
            None => debug!(tool = name, "Tool succeeded"),
        }
        Some(result)
    }
}

impl std::fmt::Debug for InMemoryToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseTool;

    impl Tool for UppercaseTool {
        fn name(&self) -> &str {
            "uppercase"
        }

        fn call(&self, input: String) -> ExecutionResult {
            ExecutionResult::success(input.to_uppercase())
        }
    }

    #[test]
    fn test_dispatch_known_and_unknown() {
        let registry = InMemoryToolRegistry::new().with_tool(Arc::new(UppercaseTool));

        let result = registry.dispatch("uppercase", "abc".to_string()).unwrap();
        assert_eq!(result.output(), "ABC");

        assert!(registry.dispatch("missing", String::new()).is_none());
        assert_eq!(
            registry.try_dispatch("missing", String::new()).unwrap_err(),
            "Tool not found: missing"
        );
    }

    #[test]
    fn test_standard_registry_contents() {
        let registry = InMemoryToolRegistry::standard(&FilewrightConfig::default());
        assert_eq!(
            registry.tool_names(),
            vec![
                "file_info",
                "find_files",
                "list_directory",
                "modify_file",
                "read_file",
                "update_json",
                "update_parameter",
                "view_file",
            ]
        );
        assert!(registry.tools().all(|tool| !tool.description().is_empty()));
        assert!(registry.tools().all(|tool| tool.input_schema().is_some()));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = InMemoryToolRegistry::new();
        registry.register(Arc::new(UppercaseTool));
        registry.register(Arc::new(UppercaseTool));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }
}
