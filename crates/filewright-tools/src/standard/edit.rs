//! # Editing Tools
//!
//! `update_parameter` performs regex substitution in a text file;
//! `update_json` merges an object into a JSON document.

use super::{parse_args, schema_of};
use crate::editor::{EditRequest, edit};
use crate::json_merge::update_json;
use crate::render;
use filewright_core::{ExecutionResult, Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

fn default_backup() -> bool {
    true
}

/// Arguments of `update_parameter`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateParameterArgs {
    /// Path of the text file to edit
    #[serde(alias = "file_path")]
    pub path: String,
    /// Regex locating the text to replace; every occurrence is replaced
    pub match_pattern: String,
    /// Replacement text; `$1` and `${name}` refer to capture groups
    pub replacement: String,
    /// Save the original content to a backup file before writing
    #[serde(default = "default_backup")]
    pub backup: bool,
}

/// Arguments of `update_json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateJsonArgs {
    /// Path of the JSON file
    #[serde(alias = "file_path")]
    pub path: String,
    /// Object merged recursively into the document
    pub updates: serde_json::Map<String, serde_json::Value>,
}

/// Regex find-and-replace inside a file.
#[derive(Debug)]
pub struct UpdateParameterTool {
    backup_suffix: String,
}

impl UpdateParameterTool {
    pub fn new(backup_suffix: impl Into<String>) -> Self {
        Self {
            backup_suffix: backup_suffix.into(),
        }
    }
}

impl Default for UpdateParameterTool {
    fn default() -> Self {
        Self::new(".bak")
    }
}

impl Tool for UpdateParameterTool {
    fn name(&self) -> &str {
        "update_parameter"
    }

    fn description(&self) -> &str {
        "Replace every match of a regex in a text file, optionally keeping a backup"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<UpdateParameterArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: UpdateParameterArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };
        debug!(path = %args.path, pattern = %args.match_pattern, backup = args.backup, "update_parameter");

        let request = EditRequest::new(args.path, args.match_pattern, args.replacement)
            .with_backup(args.backup);

        match edit(&request, &self.backup_suffix) {
            Ok(outcome) => ExecutionResult::success(render::edit_outcome(&outcome)),
            Err(e) => e.into(),
        }
    }
}

/// Merge fields into a JSON file.
#[derive(Debug)]
pub struct UpdateJsonTool {
    backup_suffix: String,
}

impl UpdateJsonTool {
    pub fn new(backup_suffix: impl Into<String>) -> Self {
        Self {
            backup_suffix: backup_suffix.into(),
        }
    }
}

impl Default for UpdateJsonTool {
    fn default() -> Self {
        Self::new(".bak")
    }
}

impl Tool for UpdateJsonTool {
    fn name(&self) -> &str {
        "update_json"
    }

    fn description(&self) -> &str {
        "Update fields in a JSON file by recursively merging an object of updates"
    }

    fn input_schema(&self) -> Option<serde_json::Value> {
        schema_of::<UpdateJsonArgs>()
    }

    fn call(&self, input: String) -> ExecutionResult {
        let args: UpdateJsonArgs = match parse_args(&input) {
            Ok(args) => args,
            Err(failure) => return failure,
        };
        debug!(path = %args.path, keys = args.updates.len(), "update_json");

        let updates = serde_json::Value::Object(args.updates);
        match update_json(Path::new(&args.path), &updates, &self.backup_suffix) {
            Ok(outcome) => ExecutionResult::success(render::json_update(&outcome)),
            Err(e) => e.into(),
        }
    }
}
