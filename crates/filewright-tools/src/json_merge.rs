//! # JSON field updates
//!
//! Recursive merge of an update object into a JSON document on disk.

use crate::files::{read_text, write_backup};
use filewright_core::{FsError, FsResult};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Merge `updates` into `target`.
///
/// When both sides are objects, keys are merged recursively. In every other
/// case, including a type mismatch, the incoming value replaces the
/// existing one.
pub fn merge_values(target: &mut Value, updates: &Value) {
    match (target, updates) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match existing.get_mut(key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        existing.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, updates) => *target = updates.clone(),
    }
}

/// Result of a JSON file update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonUpdateOutcome {
    pub path: PathBuf,
    pub backup_path: PathBuf,
    pub updated_keys: Vec<String>,
}

/// Merge `updates` (an object) into the JSON document at `path`.
///
/// The parsed original is written pretty-printed to the backup path before
/// the merged document replaces the file.
pub fn update_json(path: &Path, updates: &Value, backup_suffix: &str) -> FsResult<JsonUpdateOutcome> {
    let Value::Object(update_map) = updates else {
        return Err(FsError::invalid_input("updates must be a JSON object"));
    };

    let content = read_text(path)?;
    let mut document: Value = serde_json::from_str(&content).map_err(|e| FsError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if !document.is_object() {
        return Err(FsError::invalid_input(format!(
            "{} does not contain a JSON object at the top level",
            path.display()
        )));
    }

    let original = to_pretty(path, &document)?;
    let backup_path = write_backup(path, original.as_bytes(), backup_suffix)?;

    merge_values(&mut document, updates);

    let merged = to_pretty(path, &document)?;
    fs::write(path, merged).map_err(|e| FsError::from_io(path, e))?;

    let updated_keys: Vec<String> = update_map.keys().cloned().collect();
    debug!(path = %path.display(), keys = ?updated_keys, "JSON document updated");

    Ok(JsonUpdateOutcome {
        path: path.to_path_buf(),
        backup_path,
        updated_keys,
    })
}

fn to_pretty(path: &Path, value: &Value) -> FsResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| FsError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
