//! # File Search Tool

use super::{parse_args, schema_of};
use crate::render;
use crate::walker::{PatternMode, SearchRequest, search};
use filewright_core::{ExecutionResult, SearchDefaults, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Arguments of `find_files`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FindFilesArgs {
    /// Directory to search in
    #[serde(alias = "directory")]
    pub root: String,
    /// Regex matched against each file name (unanchored). Omit to match every file.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Treat `pattern` as a plain substring instead of a regex
    #[serde(default)]
    pub literal: bool,
    /// Match file names case-insensitively
    #[serde(default)]
    pub case_insensitive: bool,
    /// Only return files with this extension, e.g. `json` or `.txt`
    #[serde(default, alias = "file_type")]
    pub extension: Option<String>,
    /// Maximum directory depth below `root` to descend into (0 = only `root`)
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Maximum number of paths to return
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl FindFilesArgs {
    fn into_request(self, defaults: SearchDefaults) -> SearchRequest {
        let mode = if self.literal {
            PatternMode::Literal
        } else {
            PatternMode::Regex
        };

        let mut request = SearchRequest::new(self.root, self.pattern.unwrap_or_default(), defaults)
            .with_mode(mode)
            .case_insensitive(self.case_insensitive);

        if let Some(extension) = self.extension {
            request = request.with_extension(extension);
        }
        if let Some(depth) = self.max_depth {
            request = request.with_max_depth(depth);
        }
        if let Some(limit) = self.max_results {
            request = request.with_max_results(limit);
        }
        request
    }
}

/// Recursive, depth-bounded file name search.
#[derive(Debug, Clone, Default)]
pub struct FindFilesTool {
    defaults: SearchDefaults,
}

impl FindFilesTool {
    pub fn new(defaults: SearchDefaults) -> Self {
        Self { defaults }
    }
}

impl Tool for FindFilesTool {
    fn name(&self) -> &str {
        "find_files"
    }

    fn description(&self) -> &str {
        "Recursively find files under a directory whose names match a pattern, \
         up to a maximum depth and result count"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<FindFilesArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: FindFilesArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };

        let request = args.into_request(self.defaults);
        debug!(root = %request.root.display(), pattern = %request.pattern, "find_files");

        match search(&request) {
            Ok(result) => ExecutionResult::success(render::search_result(&request, &result)),
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filewright_core::FailureReason;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Config.JSON"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("app.json"), "{}").unwrap();
        dir
    }

    #[test]
    fn test_find_by_extension_without_pattern() {
        let dir = tree();
        let input = serde_json::json!({
            "directory": dir.path(),
            "file_type": "json"
        });

        let result = FindFilesTool::default().call(input.to_string());
        let output = result.into_result().unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Config.JSON"));
        assert!(lines[1].ends_with("app.json"));
    }

    #[test]
    fn test_defaults_come_from_config() {
        let dir = tree();
        let tool = FindFilesTool::new(SearchDefaults {
            max_depth: 0,
            max_results: 50,
        });
        let input = serde_json::json!({"root": dir.path(), "pattern": "json", "case_insensitive": true});

        let output = tool.call(input.to_string()).into_result().unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.ends_with("Config.JSON"));
    }

    #[test]
    fn test_no_matches_message() {
        let dir = tree();
        let input = serde_json::json!({"root": dir.path(), "pattern": "zzz"});

        let output = FindFilesTool::default().call(input.to_string()).output();
        assert!(output.starts_with("No files matching 'zzz' found in"));
    }

    #[test]
    fn test_failures_are_typed() {
        let result = FindFilesTool::default().call(r#"{"root": "/tmp", "pattern": "("}"#.to_string());
        assert!(matches!(
            result.failure_reason(),
            Some(FailureReason::InvalidPattern { .. })
        ));

        let result = FindFilesTool::default().call(r#"{"pattern": "x"}"#.to_string());
        assert!(matches!(
            result.failure_reason(),
            Some(FailureReason::InvalidInput { .. })
        ));

        let result = FindFilesTool::default()
            .call(r#"{"root": "/definitely/missing/dir", "pattern": "x"}"#.to_string());
        assert!(matches!(
            result.failure_reason(),
            Some(FailureReason::NotFound { .. })
        ));
    }
}
