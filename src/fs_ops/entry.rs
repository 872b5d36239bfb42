//! File entry discovery.
//! One full walk of the source root, regular files only, in a deterministic order.

use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::naming::split_at_extension;

/// A regular file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path as reported by the walk.
    pub path: PathBuf,
    /// Base name (no directory part).
    pub name: OsString,
    /// Lower-cased extension including the leading dot, or empty.
    pub extension: String,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_os_string();
        let extension = lowercase_extension(&name);
        Some(Self {
            path,
            name,
            extension,
        })
    }
}

/// `.JPG` -> `.jpg`, `archive.tar.gz` -> `.gz`, `.env` and `..jpg` -> ``.
fn lowercase_extension(name: &OsStr) -> String {
    let (_, ext) = split_at_extension(name);
    ext.to_string_lossy().to_lowercase()
}

/// Collect every regular file under `root`.
///
/// Directory entries are sorted by file name, so the result is a depth-first
/// listing that only depends on the tree's structure. Symlinks are neither
/// followed nor returned. When `prune` names a directory inside `root` (the
/// destination nested in the source), that subtree is skipped entirely.
pub fn discover(root: &Path, prune: Option<&Path>) -> Result<Vec<FileEntry>> {
    let prune_real = prune.map(|p| dunce::canonicalize(p).unwrap_or_else(|_| p.to_path_buf()));

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            match &prune_real {
                Some(skip) => {
                    let real = dunce::canonicalize(e.path()).unwrap_or_else(|_| e.path().to_path_buf());
                    if &real == skip {
                        debug!(dir = %e.path().display(), "Skipping destination directory nested in source");
                        false
                    } else {
                        true
                    }
                }
                None => true,
            }
        });

    let mut entries = Vec::new();
    for item in walker {
        let item = item.with_context(|| format!("walk source tree '{}'", root.display()))?;
        if !item.file_type().is_file() {
            continue;
        }
        if let Some(entry) = FileEntry::new(item.into_path()) {
            trace!(path = %entry.path.display(), ext = %entry.extension, "discovered");
            entries.push(entry);
        }
    }
    debug!(root = %root.display(), count = entries.len(), "Discovery finished");
    Ok(entries)
}
