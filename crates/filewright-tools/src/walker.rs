//! # Directory Walker
//!
//! Recursive, depth-bounded file search filtered by a name pattern.
//!
//! Traversal visits directory entries sorted by file name, so for a fixed
//! file-system snapshot the order of matches is deterministic. Depth is the
//! number of separators between the search root and the directory being
//! visited: files directly under the root are at depth 0, and directories
//! deeper than `max_depth` are never descended into.
//!
//! Collection stops as soon as `max_results` matches exist, so a capped
//! result is always a prefix of the uncapped one.

use filewright_core::{FsError, FsResult, SearchDefaults};
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// How the search pattern is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternMode {
    /// Regular expression with unanchored search semantics.
    #[default]
    Regex,
    /// Plain substring; regex metacharacters are matched literally.
    Literal,
}

/// A single file search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub root: PathBuf,
    pub pattern: String,
    pub mode: PatternMode,
    pub case_insensitive: bool,
    pub extension: Option<String>,
    pub max_depth: usize,
    pub max_results: usize,
}

impl SearchRequest {
    /// Create a regex search using the configured depth and result limits.
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>, defaults: SearchDefaults) -> Self {
        Self {
            root: root.into(),
            pattern: pattern.into(),
            mode: PatternMode::Regex,
            case_insensitive: false,
            extension: None,
            max_depth: defaults.max_depth,
            max_results: defaults.max_results,
        }
    }

    pub fn with_mode(mut self, mode: PatternMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// A subdirectory the walker could not read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: String,
}

/// Matches in traversal order, plus anything that was skipped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub matches: Vec<PathBuf>,
    pub skipped: Vec<SkippedDir>,
    /// Set when traversal stopped because `max_results` was reached.
    pub limit_reached: bool,
}

/// Compiled file-name filter.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    regex: Regex,
    extension_suffix: Option<String>,
}

impl NameMatcher {
    /// Compile the pattern (and extension filter) of a request.
    pub fn compile(request: &SearchRequest) -> FsResult<Self> {
        let source = match request.mode {
            PatternMode::Regex => request.pattern.clone(),
            PatternMode::Literal => regex::escape(&request.pattern),
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(request.case_insensitive)
            .build()
            .map_err(|e| FsError::invalid_pattern(&request.pattern, e))?;

        let extension_suffix = request
            .extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext.to_lowercase()));

        Ok(Self {
            regex,
            extension_suffix,
        })
    }

    /// Whether a file's base name passes the filter.
    pub fn is_match(&self, name: &str) -> bool {
        if let Some(suffix) = &self.extension_suffix
            && !name.to_lowercase().ends_with(suffix.as_str())
        {
            return false;
        }
        self.regex.is_match(name)
    }
}

/// Number of separators between `root` and the directory containing `file`.
///
/// Returns `None` when `file` does not live under `root`.
pub fn directory_depth(root: &Path, file: &Path) -> Option<usize> {
    let relative = file.strip_prefix(root).ok()?;
    Some(relative.components().count().saturating_sub(1))
}

/// Search `request.root` for files whose names match the pattern.
///
/// # Errors
///
/// - `InvalidInput` if `max_results` is zero
/// - `InvalidPattern` if the pattern does not compile (before any traversal)
/// - `NotFound` / `NotADirectory` if the root is missing or not a directory
/// - `PermissionDenied` / `Io` if the root itself cannot be read
///
/// Unreadable subdirectories are not errors: they are listed in
/// [`SearchResult::skipped`] and traversal continues with their siblings.
pub fn search(request: &SearchRequest) -> FsResult<SearchResult> {
    if request.max_results == 0 {
        return Err(FsError::invalid_input("max_results must be at least 1"));
    }

    let matcher = NameMatcher::compile(request)?;

    let root = request.root.as_path();
    let metadata = fs::metadata(root).map_err(|e| FsError::from_io(root, e))?;
    if !metadata.is_dir() {
        return Err(FsError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    debug!(
        root = %root.display(),
        pattern = %request.pattern,
        max_depth = request.max_depth,
        max_results = request.max_results,
        "Starting file search"
    );

    // Files inside a directory at depth d sit at walkdir depth d + 1.
    let walker = WalkDir::new(root)
        .follow_links(false)
        .max_depth(request.max_depth.saturating_add(1))
        .sort_by_file_name();

    let result = collect_matches(walker, root, &matcher, request.max_results)?;

    debug!(
        matches = result.matches.len(),
        skipped = result.skipped.len(),
        limit_reached = result.limit_reached,
        "File search completed"
    );

    Ok(result)
}

/// Drain walk entries into a result, stopping at `max_results` matches.
///
/// Errors below the root become [`SkippedDir`] entries; an error on the root
/// itself aborts the walk.
fn collect_matches<I>(
    entries: I,
    root: &Path,
    matcher: &NameMatcher,
    max_results: usize,
) -> FsResult<SearchResult>
where
    I: IntoIterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut result = SearchResult::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    return Err(match err.into_io_error() {
                        Some(io_err) => FsError::from_io(root, io_err),
                        None => FsError::invalid_input(format!(
                            "cannot traverse {}",
                            root.display()
                        )),
                    });
                }

                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let reason = err
                    .io_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                warn!(path = %path.display(), reason = %reason, "Skipping unreadable directory");
                result.skipped.push(SkippedDir { path, reason });
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        if matcher.is_match(&entry.file_name().to_string_lossy()) {
            result.matches.push(entry.into_path());
            if result.matches.len() >= max_results {
                result.limit_reached = true;
                break;
            }
        }
    }

    Ok(result)
}
