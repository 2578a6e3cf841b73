//! # Filewright Tools
//!
//! File-system operations and the tools that expose them.
//!
//! ## Operations
//!
//! - **Directory Walker** (`walker`): depth-bounded, capped file name search
//! - **Parameter Editor** (`editor`): regex substitution with optional backup
//! - **File Writer** (`files`): whole-content replacement with backup
//! - **JSON Updater** (`json_merge`): recursive merge into a JSON document
//! - **Inspector** (`inspect`): view a file, list a directory, stat a path
//!
//! Operations return typed results and [`FsError`]; the tools in
//! [`standard`] render them as text for tool-calling clients.
//!
//! [`FsError`]: filewright_core::FsError

pub mod editor;
pub mod files;
pub mod inspect;
pub mod json_merge;
/// Text rendering of operation outcomes.
pub mod render;
/// Tool registry for dispatching calls by name.
pub mod registry;
/// Standard tool library.
pub mod standard;
pub mod walker;

pub use editor::{EditOutcome, EditRequest, edit};
pub use files::{WriteOutcome, backup_path, read_text, write_file};
pub use inspect::{DirectoryListing, FileInfo, FileView, file_info, list_directory, view_file};
pub use json_merge::{JsonUpdateOutcome, merge_values, update_json};
pub use registry::{InMemoryToolRegistry, ToolRegistry};
pub use standard::*;
pub use walker::{PatternMode, SearchRequest, SearchResult, SkippedDir, search};

pub use filewright_core::{ExecutionResult, FailureReason, FsError, Tool};
