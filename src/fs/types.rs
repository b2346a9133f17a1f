//! File System Types
//!
//! Core types and the read-only trait behind the terminal's virtual file system.

use async_trait::async_trait;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },
}

impl FsError {
    pub(crate) fn not_found(path: &str, operation: &str) -> Self {
        FsError::NotFound { path: path.to_string(), operation: operation.to_string() }
    }

    /// The shell-style reason text, e.g. `No such file or directory`.
    pub fn reason(&self) -> &'static str {
        match self {
            FsError::NotFound { .. } => "No such file or directory",
            FsError::IsDirectory { .. } => "Is a directory",
            FsError::NotDirectory { .. } => "Not a directory",
        }
    }
}

/// File system entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    File { content: String },
    Directory,
}

impl FsEntry {
    pub fn file(content: impl Into<String>) -> Self {
        FsEntry::File { content: content.into() }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsEntry::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory)
    }
}

/// File status information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsStat {
    pub is_file: bool,
    pub is_directory: bool,
    pub size: u64,
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub name: String,
    pub is_file: bool,
    pub is_directory: bool,
}

impl DirentEntry {
    /// Name with a trailing `/` for directories, as `ls` and completion print it.
    pub fn display_name(&self) -> String {
        if self.is_directory {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Read-only filesystem interface used by the terminal commands.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read the contents of a file
    async fn read_file(&self, path: &str) -> Result<String, FsError>;

    /// Check if a path exists
    async fn exists(&self, path: &str) -> bool;

    /// Get file/directory information
    async fn stat(&self, path: &str) -> Result<FsStat, FsError>;

    /// Read directory contents in insertion order (returns entry names)
    async fn readdir(&self, path: &str) -> Result<Vec<String>, FsError>;

    /// Read directory contents in insertion order with file type information
    async fn readdir_with_file_types(&self, path: &str) -> Result<Vec<DirentEntry>, FsError>;

    /// Resolve a path typed by the user against a base directory
    fn resolve_path(&self, base: &str, path: &str) -> String;
}
