//! # Parameter Editor
//!
//! Regex-based in-place substitution in a text file, with an optional
//! verbatim backup of the pre-edit content.
//!
//! The whole-file read-modify-write is not atomic and takes no lock: two
//! concurrent edits of the same path may interleave, and the later write
//! can silently discard the earlier one. Callers serialize edits to a path.

use crate::files::{read_text, write_backup};
use filewright_core::{FsError, FsResult};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A single substitution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub path: PathBuf,
    pub match_pattern: String,
    pub replacement: String,
    pub with_backup: bool,
}

impl EditRequest {
    pub fn new(
        path: impl Into<PathBuf>,
        match_pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            match_pattern: match_pattern.into(),
            replacement: replacement.into(),
            with_backup: true,
        }
    }

    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.with_backup = enabled;
        self
    }
}

/// What an edit did.
///
/// `success == false` means the pattern did not occur; that is a reported
/// outcome, and nothing was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditOutcome {
    pub success: bool,
    pub message: String,
    pub backup_path: Option<PathBuf>,
    pub replacements: usize,
    /// 1-based line numbers where a replaced occurrence starts.
    pub lines: Vec<usize>,
}

/// Replace every non-overlapping occurrence of `match_pattern` in the file.
///
/// The replacement supports `$1` / `${name}` group references. When
/// `with_backup` is set, the original bytes are copied to
/// `<path><backup_suffix>` immediately before the new content is written.
pub fn edit(request: &EditRequest, backup_suffix: &str) -> FsResult<EditOutcome> {
    let regex = Regex::new(&request.match_pattern)
        .map_err(|e| FsError::invalid_pattern(&request.match_pattern, e))?;

    let content = read_text(&request.path)?;
    let lines = match_lines(&regex, &content);

    if lines.is_empty() {
        debug!(path = %request.path.display(), pattern = %request.match_pattern, "Pattern not found");
        return Ok(EditOutcome {
            success: false,
            message: format!(
                "Pattern '{}' not found in {}",
                request.match_pattern,
                request.path.display()
            ),
            backup_path: None,
            replacements: 0,
            lines: Vec::new(),
        });
    }

    let replacements = regex.find_iter(&content).count();
    let updated = regex.replace_all(&content, request.replacement.as_str());

    let backup_path = if request.with_backup {
        Some(write_backup(&request.path, content.as_bytes(), backup_suffix)?)
    } else {
        None
    };

    fs::write(&request.path, updated.as_bytes()).map_err(|e| FsError::from_io(&request.path, e))?;

    debug!(
        path = %request.path.display(),
        replacements,
        backup = backup_path.is_some(),
        "Parameter updated"
    );

    Ok(EditOutcome {
        success: true,
        message: format!(
            "Replaced {} occurrence{} of '{}' in {}",
            replacements,
            if replacements == 1 { "" } else { "s" },
            request.match_pattern,
            request.path.display()
        ),
        backup_path,
        replacements,
        lines,
    })
}

/// Distinct 1-based line numbers on which matches start.
fn match_lines(regex: &Regex, content: &str) -> Vec<usize> {
    let mut lines: Vec<usize> = Vec::new();
    let mut line = 1;
    let mut scanned = 0;

    for m in regex.find_iter(content) {
        line += content[scanned..m.start()].matches('\n').count();
        scanned = m.start();
        if lines.last() != Some(&line) {
            lines.push(line);
        }
    }

    lines
}
