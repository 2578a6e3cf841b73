//! # Whole-file read and write helpers
//!
//! Text reads with typed decode errors, backup copies, and the
//! whole-content writer behind `modify_file`.
//!
//! None of these operations lock the target. A read-modify-write sequence
//! composed from them is not atomic with respect to other writers; callers
//! must serialize edits to the same path themselves.

use filewright_core::{FsError, FsResult};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a regular file as UTF-8 text.
pub fn read_text(path: &Path) -> FsResult<String> {
    let metadata = fs::metadata(path).map_err(|e| FsError::from_io(path, e))?;
    if !metadata.is_file() {
        return Err(FsError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| FsError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|e| FsError::Decode {
        path: path.to_path_buf(),
        message: e.utf8_error().to_string(),
    })
}

/// Sibling path formed by appending `suffix` to the full file name.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}

/// Write `bytes` verbatim to the backup path of `path`, replacing any
/// previous backup.
pub fn write_backup(path: &Path, bytes: &[u8], suffix: &str) -> FsResult<PathBuf> {
    let backup = backup_path(path, suffix);
    fs::write(&backup, bytes).map_err(|e| FsError::from_io(&backup, e))?;
    debug!(path = %path.display(), backup = %backup.display(), "Wrote backup copy");
    Ok(backup)
}

/// Result of a whole-content write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub backup_path: Option<PathBuf>,
}

/// Replace the content of `path`, first copying any existing content to
/// its backup path. A missing file is created; its parent must exist.
pub fn write_file(path: &Path, content: &str, backup_suffix: &str) -> FsResult<WriteOutcome> {
    let backup_path = match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            return Err(FsError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {
            let previous = fs::read(path).map_err(|e| FsError::from_io(path, e))?;
            Some(write_backup(path, &previous, backup_suffix)?)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(FsError::from_io(path, e)),
    };

    fs::write(path, content).map_err(|e| FsError::from_io(path, e))?;

    Ok(WriteOutcome {
        path: path.to_path_buf(),
        bytes_written: content.len(),
        backup_path,
    })
}
