//! Error types for cpploclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while tallying lines
#[derive(Error, Debug)]
pub enum CpplocError {
    /// Failed to open or read a qualifying file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to list the directory being scanned
    #[error("failed to list directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// A suffix that would match every file name
    #[error("invalid suffix '{0}': suffixes must not be empty")]
    InvalidSuffix(String),
}
