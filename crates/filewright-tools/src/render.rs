//! Human-readable rendering of operation outcomes.
//!
//! These strings are what a tool-calling client sees; the typed outcomes
//! stay inside the crate.

use crate::editor::EditOutcome;
use crate::files::WriteOutcome;
use crate::inspect::{DirectoryListing, FileInfo, FileView};
use crate::json_merge::JsonUpdateOutcome;
use crate::walker::{SearchRequest, SearchResult};
use std::fmt::Write as _;

pub fn search_result(request: &SearchRequest, result: &SearchResult) -> String {
    let mut out = if result.matches.is_empty() {
        format!(
            "No files matching '{}' found in {}",
            request.pattern,
            request.root.display()
        )
    } else {
        result
            .matches
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };

    if result.limit_reached {
        let _ = write!(
            out,
            "\n\n(result limit of {} reached; more files may match)",
            request.max_results
        );
    }

    if !result.skipped.is_empty() {
        out.push_str("\n\nSkipped unreadable directories:");
        for skipped in &result.skipped {
            let _ = write!(out, "\n  {}: {}", skipped.path.display(), skipped.reason);
        }
    }

    out
}

pub fn file_view(view: &FileView) -> String {
    format!("Content of {}:\n\n{}", view.path.display(), view.content)
}

pub fn write_outcome(outcome: &WriteOutcome) -> String {
    let mut out = format!("File modified successfully: {}", outcome.path.display());
    if let Some(backup) = &outcome.backup_path {
        let _ = write!(out, "\nBackup saved to {}", backup.display());
    }
    out
}

/// Edit summary. A no-match outcome renders as its message alone.
pub fn edit_outcome(outcome: &EditOutcome) -> String {
    let mut out = outcome.message.clone();
    if !outcome.success {
        return out;
    }

    let lines = outcome
        .lines
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let _ = write!(out, "\nLines: {}", lines);

    if let Some(backup) = &outcome.backup_path {
        let _ = write!(out, "\nBackup saved to {}", backup.display());
    }
    out
}

pub fn json_update(outcome: &JsonUpdateOutcome) -> String {
    format!(
        "JSON file updated successfully: {}\nBackup saved to {}",
        outcome.path.display(),
        outcome.backup_path.display()
    )
}

pub fn directory_listing(listing: &DirectoryListing) -> String {
    let mut out = String::from("Directories:");
    if listing.directories.is_empty() {
        out.push_str("\n  (none)");
    }
    for dir in &listing.directories {
        let _ = write!(out, "\n  {}/", dir);
    }

    out.push_str("\n\nFiles:");
    if listing.files.is_empty() {
        out.push_str("\n  (none)");
    }
    for file in &listing.files {
        let _ = write!(out, "\n  {}", file);
    }
    out
}

pub fn file_info(info: &FileInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}
