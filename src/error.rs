//! Error types and handling for ctxsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ctxsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum SyncError {
    #[error("Context document not found: {path}")]
    #[diagnostic(
        code(ctxsync::context::not_found),
        help("Create .ai/context.md in the workspace root, or point --workspace at a directory that has one")
    )]
    ContextNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(ctxsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(ctxsync::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to list directory: {path}")]
    #[diagnostic(code(ctxsync::fs::list_failed))]
    DirListFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ctxsync::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SyncError>;
