//! # File System Tools
//!
//! Viewing, reading, whole-content writes, directory listing and metadata.

use super::{parse_args, schema_of};
use crate::files::write_file;
use crate::inspect::{file_info, list_directory, view_file};
use crate::render;
use filewright_core::{ExecutionResult, FailureReason, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Arguments of tools that take a single path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PathArgs {
    /// Path of the file or directory
    #[serde(alias = "file_path")]
    pub path: String,
}

/// Arguments of `modify_file`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ModifyFileArgs {
    /// Path of the file to write
    #[serde(alias = "file_path")]
    pub path: String,
    /// New content, replacing the whole file
    pub content: String,
}

/// Show a file's content under a header.
#[derive(Debug, Default)]
pub struct ViewFileTool;

impl ViewFileTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for ViewFileTool {
    fn name(&self) -> &str {
        "view_file"
    }

    fn description(&self) -> &str {
        "View the content of a text file"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<PathArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: PathArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };
        debug!(path = %args.path, "view_file");

        match view_file(Path::new(&args.path)) {
            Ok(view) => ExecutionResult::success(render::file_view(&view)),
            Err(e) => e.into(),
        }
    }
}

/// Return a file's raw content.
#[derive(Debug, Default)]
pub struct ReadFileTool;

impl ReadFileTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for ReadFileTool {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read and return the raw content of a text file"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<PathArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: PathArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };
        debug!(path = %args.path, "read_file");

        match view_file(Path::new(&args.path)) {
            Ok(view) => ExecutionResult::success(view.content),
            Err(e) => e.into(),
        }
    }
}

/// Replace a file's whole content, keeping a backup of what was there.
#[derive(Debug)]
pub struct ModifyFileTool {
    backup_suffix: String,
}

impl ModifyFileTool {
    pub fn new(backup_suffix: impl Into<String>) -> Self {
        Self {
            backup_suffix: backup_suffix.into(),
        }
    }
}

impl Default for ModifyFileTool {
    fn default() -> Self {
        Self::new(".bak")
    }
}

impl Tool for ModifyFileTool {
    fn name(&self) -> &str {
        "modify_file"
    }

    fn description(&self) -> &str {
        "Replace the content of a file, backing up the previous content first"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<ModifyFileArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: ModifyFileArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };
        debug!(path = %args.path, bytes = args.content.len(), "modify_file");

        match write_file(Path::new(&args.path), &args.content, &self.backup_suffix) {
            Ok(outcome) => ExecutionResult::success(render::write_outcome(&outcome)),
            Err(e) => e.into(),
        }
    }
}

/// List a directory's subdirectories and files.
#[derive(Debug, Default)]
pub struct ListDirectoryTool;

impl ListDirectoryTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for ListDirectoryTool {
    fn name(&self) -> &str {
        "list_directory"
    }

    fn description(&self) -> &str {
        "List the subdirectories and files of a directory"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<PathArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: PathArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };
        debug!(path = %args.path, "list_directory");

        match list_directory(Path::new(&args.path)) {
            Ok(listing) => ExecutionResult::success(render::directory_listing(&listing)),
            Err(e) => e.into(),
        }
    }
}

/// Size, modification time and kind of a path.
#[derive(Debug, Default)]
pub struct FileInfoTool;

impl FileInfoTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for FileInfoTool {
    fn name(&self) -> &str {
        "file_info"
    }

    fn description(&self) -> &str {
        "Get size, last modification time and type of a path; reports exists=false for missing paths"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<PathArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: PathArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };

        let info = match file_info(Path::new(&args.path)) {
            Ok(info) => info,
            Err(e) => return e.into(),
        };

        match render::file_info(&info) {
            Ok(text) => ExecutionResult::success(text),
            Err(e) => ExecutionResult::failed(FailureReason::InternalError {
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn call(tool: &dyn Tool, args: serde_json::Value) -> ExecutionResult {
        tool.call(args.to_string())
    }

    #[test]
    fn test_view_and_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "hi there").unwrap();

        let viewed = call(&ViewFileTool::new(), serde_json::json!({"path": path}));
        assert_eq!(
            viewed.output(),
            format!("Content of {}:\n\nhi there", path.display())
        );

        let read = call(&ReadFileTool::new(), serde_json::json!({"file_path": path}));
        assert_eq!(read.output(), "hi there");
    }

    #[test]
    fn test_view_missing_is_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let result = call(&ViewFileTool::new(), serde_json::json!({"path": path}));
        assert!(matches!(
            result.failure_reason(),
            Some(FailureReason::NotFound { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_modify_file_reports_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf.ini");
        fs::write(&path, "a=1").unwrap();

        let result = call(
            &ModifyFileTool::new(".orig"),
            serde_json::json!({"path": path, "content": "a=2"}),
        );
        let output = result.into_result().unwrap();
        assert!(output.starts_with(&format!("File modified successfully: {}", path.display())));
        assert!(output.contains("conf.ini.orig"));
        assert_eq!(fs::read_to_string(dir.path().join("conf.ini.orig")).unwrap(), "a=1");
    }

    #[test]
    fn test_list_directory_output() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x"), "").unwrap();
        fs::create_dir(dir.path().join("y")).unwrap();

        let result = call(&ListDirectoryTool::new(), serde_json::json!({"path": dir.path()}));
        assert_eq!(result.output(), "Directories:\n  y/\n\nFiles:\n  x");
    }

    #[test]
    fn test_file_info_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sized.txt");
        fs::write(&path, "12345").unwrap();

        let result = call(&FileInfoTool::new(), serde_json::json!({"path": path}));
        let info: serde_json::Value = serde_json::from_str(&result.output()).unwrap();
        assert_eq!(info["exists"], true);
        assert_eq!(info["size"], 5);
        assert_eq!(info["is_directory"], false);
        assert!(info["last_modified"].is_string());
    }
}
