//! Virtual File System Implementation
//!
//! A read-only in-memory tree synthesized from portfolio content. Entries
//! live in a flat path-keyed map that keeps insertion order, so `tree`
//! shows directories in the order they were built.

use std::collections::HashSet;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::types::*;

/// In-memory virtual file system.
pub struct VirtualFs {
    data: RwLock<IndexMap<String, FsEntry>>,
    home: String,
}

impl VirtualFs {
    /// Create an empty filesystem whose `~` expands to `home`.
    pub fn new(home: &str) -> Self {
        Self::with_entries(home, Vec::new())
    }

    /// Create with initial entries (paths are normalized, parents created).
    pub fn with_entries(home: &str, entries: Vec<(String, FsEntry)>) -> Self {
        Self {
            data: RwLock::new(build_map(entries)),
            home: normalize_path(home),
        }
    }

    /// Replace the whole tree, e.g. after the content language changed.
    pub async fn replace(&self, entries: Vec<(String, FsEntry)>) {
        let map = build_map(entries);
        *self.data.write().await = map;
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    /// Number of entries, root included.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }
}

fn build_map(entries: Vec<(String, FsEntry)>) -> IndexMap<String, FsEntry> {
    let mut data = IndexMap::new();
    data.insert("/".to_string(), FsEntry::Directory);
    for (path, entry) in entries {
        let normalized = normalize_path(&path);
        ensure_parent_dirs(&mut data, &normalized);
        data.insert(normalized, entry);
    }
    data
}

// ============================================================================
// Path utilities
// ============================================================================

/// Collapse `.`, `..` and repeated or trailing slashes into an absolute path.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/').filter(|p| !p.is_empty() && *p != ".") {
        if part == ".." {
            resolved.pop();
        } else {
            resolved.push(part);
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Join `name` under the absolute directory `dir`.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

fn dirname(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => normalized[..pos].to_string(),
    }
}

fn ensure_parent_dirs(data: &mut IndexMap<String, FsEntry>, path: &str) {
    let dir = dirname(path);
    if dir == "/" {
        return;
    }
    if !data.contains_key(&dir) {
        ensure_parent_dirs(data, &dir);
        data.insert(dir, FsEntry::Directory);
    }
}

// ============================================================================
// FileSystem trait implementation
// ============================================================================

#[async_trait]
impl FileSystem for VirtualFs {
    async fn read_file(&self, path: &str) -> Result<String, FsError> {
        let data = self.data.read().await;
        match data.get(&normalize_path(path)) {
            Some(FsEntry::File { content }) => Ok(content.clone()),
            Some(FsEntry::Directory) => Err(FsError::IsDirectory {
                path: path.to_string(),
                operation: "read".to_string(),
            }),
            None => Err(FsError::not_found(path, "open")),
        }
    }

    async fn exists(&self, path: &str) -> bool {
        self.data.read().await.contains_key(&normalize_path(path))
    }

    async fn stat(&self, path: &str) -> Result<FsStat, FsError> {
        let data = self.data.read().await;
        match data.get(&normalize_path(path)) {
            Some(entry) => {
                let size = match entry {
                    FsEntry::File { content } => content.len() as u64,
                    FsEntry::Directory => 0,
                };
                Ok(FsStat {
                    is_file: entry.is_file(),
                    is_directory: entry.is_directory(),
                    size,
                })
            }
            None => Err(FsError::not_found(path, "stat")),
        }
    }

    async fn readdir(&self, path: &str) -> Result<Vec<String>, FsError> {
        let entries = self.readdir_with_file_types(path).await?;
        Ok(entries.into_iter().map(|e| e.name).collect())
    }

    async fn readdir_with_file_types(&self, path: &str) -> Result<Vec<DirentEntry>, FsError> {
        let data = self.data.read().await;
        let normalized = normalize_path(path);

        match data.get(&normalized) {
            Some(FsEntry::Directory) => {}
            Some(_) => return Err(FsError::NotDirectory {
                path: path.to_string(),
                operation: "scandir".to_string(),
            }),
            None => return Err(FsError::not_found(path, "scandir")),
        }

        let prefix = if normalized == "/" {
            "/".to_string()
        } else {
            format!("{}/", normalized)
        };

        let mut seen: HashSet<&str> = HashSet::new();
        let mut entries = Vec::new();
        for (p, fs_entry) in data.iter() {
            let Some(rest) = p.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() || rest.contains('/') || !seen.insert(rest) {
                continue;
            }
            entries.push(DirentEntry {
                name: rest.to_string(),
                is_file: fs_entry.is_file(),
                is_directory: fs_entry.is_directory(),
            });
        }
        Ok(entries)
    }

    fn resolve_path(&self, base: &str, path: &str) -> String {
        if path.is_empty() {
            normalize_path(base)
        } else if path == "~" {
            self.home.clone()
        } else if let Some(rest) = path.strip_prefix("~/") {
            normalize_path(&format!("{}/{}", self.home, rest))
        } else if path.starts_with('/') {
            normalize_path(path)
        } else {
            normalize_path(&format!("{}/{}", base, path))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
