//! Common file system operations with unified error handling

use std::path::Path;

use crate::error::{Result, SyncError};

fn file_read_error(path: &Path, e: std::io::Error) -> SyncError {
    SyncError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn file_write_error(path: &Path, e: std::io::Error) -> SyncError {
    SyncError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Read a file to a string
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| file_read_error(path, e))
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_write_error(parent, e))?;
    }
    Ok(())
}

/// Write a file, creating parent directories as needed. Existing content is
/// replaced.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, content).map_err(|e| file_write_error(path, e))
}
