//! Read-only inspection: view a file, list a directory, stat a path.

use crate::files::read_text;
use chrono::{DateTime, Utc};
use filewright_core::{FsError, FsResult};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Full text content of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileView {
    pub path: PathBuf,
    pub content: String,
}

/// Load a UTF-8 file. Never creates anything on failure.
pub fn view_file(path: &Path) -> FsResult<FileView> {
    let content = read_text(path)?;
    Ok(FileView {
        path: path.to_path_buf(),
        content,
    })
}

/// Immediate children of a directory, split by kind and sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    pub path: PathBuf,
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

/// List a directory's entries.
///
/// Symlinks that resolve to a directory are listed as directories. Anything
/// else that is not a directory (regular files, broken links, sockets) is
/// listed as a file.
pub fn list_directory(path: &Path) -> FsResult<DirectoryListing> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
    if !metadata.is_dir() {
        return Err(FsError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mut listing = DirectoryListing {
        path: path.to_path_buf(),
        ..Default::default()
    };

    let entries = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if is_directory_like(&entry)? {
            listing.directories.push(name);
        } else {
            listing.files.push(name);
        }
    }

    listing.directories.sort();
    listing.files.sort();
    Ok(listing)
}

fn is_directory_like(entry: &fs::DirEntry) -> FsResult<bool> {
    let file_type = entry
        .file_type()
        .map_err(|e| FsError::from_io(&entry.path(), e))?;

    if file_type.is_dir() {
        return Ok(true);
    }
    if file_type.is_symlink() {
        // broken links fall through as files
        return Ok(fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()));
    }
    Ok(false)
}

/// Metadata for a path. A missing path is reported with `exists: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_directory: Option<bool>,
}

pub fn file_info(path: &Path) -> FsResult<FileInfo> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(FileInfo {
                path: path.to_path_buf(),
                exists: false,
                size: None,
                last_modified: None,
                is_directory: None,
            });
        }
        Err(e) => return Err(FsError::from_io(path, e)),
    };

    Ok(FileInfo {
        path: path.to_path_buf(),
        exists: true,
        size: Some(metadata.len()),
        last_modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        is_directory: Some(metadata.is_dir()),
    })
}
