//! The relocation run: flatten every eligible file under a source tree into
//! one destination directory without overwriting anything.
//!
//! Behavior:
//! - The destination (and missing ancestors) is created up front; an existing
//!   destination is reused as-is.
//! - All entries are discovered before the first move, so nothing is visited twice.
//! - Entries rejected by the allow-list stay where they are and are counted as skipped.
//! - The first failing move aborts the run. Files moved before it stay moved.

use anyhow::Result;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::MoverError;

use super::atomic::move_file;
use super::entry::discover;
use super::filter::ExtensionAllowList;
use super::helpers::io_error_with_help;
use super::naming::resolve_destination;

/// Counters produced by one relocation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelocationOutcome {
    /// Files moved into the destination (renamed ones included).
    pub moved: usize,
    /// Files that needed a numeric suffix.
    pub renamed: usize,
    /// Files left in place by the extension filter.
    pub skipped: usize,
}

impl fmt::Display for RelocationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "moved={} renamed={} skipped={}",
            self.moved, self.renamed, self.skipped
        )
    }
}

/// Per-entry notification for progress display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationEvent {
    Moved {
        from: PathBuf,
        to: PathBuf,
        renamed: bool,
    },
    Skipped {
        path: PathBuf,
    },
}

/// Relocate every eligible file under `source` into `destination`.
pub fn relocate(
    source: &Path,
    destination: &Path,
    allow: Option<&ExtensionAllowList>,
) -> Result<RelocationOutcome> {
    relocate_with(source, destination, allow, |_| {})
}

/// Same as [`relocate`], calling `observer` after each processed entry.
pub fn relocate_with<F>(
    source: &Path,
    destination: &Path,
    allow: Option<&ExtensionAllowList>,
    mut observer: F,
) -> Result<RelocationOutcome>
where
    F: FnMut(&RelocationEvent),
{
    check_source(source)?;
    ensure_destination(destination)?;

    let entries = discover(source, Some(destination))?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        files = entries.len(),
        filter = allow.map(|a| a.to_string()).unwrap_or_else(|| "<none>".into()),
        "Starting relocation"
    );

    let mut outcome = RelocationOutcome::default();
    for entry in entries {
        if let Some(list) = allow
            && !list.allows(&entry)
        {
            outcome.skipped += 1;
            debug!(path = %entry.path.display(), ext = %entry.extension, "Skipped (extension not allowed)");
            observer(&RelocationEvent::Skipped { path: entry.path });
            continue;
        }

        let (dest, renamed) = resolve_destination(destination, &entry.name);
        move_file(&entry.path, &dest).map_err(|e| MoverError::Move {
            src: entry.path.clone(),
            dest: dest.clone(),
            message: format!("{e:#}"),
        })?;

        outcome.moved += 1;
        if renamed {
            outcome.renamed += 1;
        }
        debug!(from = %entry.path.display(), to = %dest.display(), renamed, "Moved");
        observer(&RelocationEvent::Moved {
            from: entry.path,
            to: dest,
            renamed,
        });
    }

    info!(%outcome, "Relocation finished");
    Ok(outcome)
}

fn check_source(source: &Path) -> Result<()> {
    let meta = match fs::metadata(source) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MoverError::SourceNotFound(source.to_path_buf()).into());
        }
        Err(e) => return Err(io_error_with_help("read source", source)(e)),
    };
    if !meta.is_dir() {
        return Err(MoverError::SourceNotDirectory(source.to_path_buf()).into());
    }
    Ok(())
}

fn ensure_destination(destination: &Path) -> Result<()> {
    if destination.exists() {
        if !destination.is_dir() {
            return Err(MoverError::DestinationNotDirectory(destination.to_path_buf()).into());
        }
        return Ok(());
    }
    fs::create_dir_all(destination)
        .map_err(io_error_with_help("create destination directory", destination))?;
    info!(path = %destination.display(), "Created destination directory");
    Ok(())
}
