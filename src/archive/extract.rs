//! Input resolution.
//! A plain directory is used in place; a zip archive is unpacked into a private
//! scratch directory that lives exactly as long as the returned value.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info};

use crate::errors::MoverError;
use crate::fs_ops::io_error_with_help;

/// What the user pointed us at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    Directory(PathBuf),
    ZipArchive(PathBuf),
}

impl SourceSpec {
    /// Classify a path: existing directories are folders, `.zip` files are archives.
    /// Anything else is treated as a folder and fails later with a precise error.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.is_dir() && looks_like_zip(&path) {
            SourceSpec::ZipArchive(path)
        } else {
            SourceSpec::Directory(path)
        }
    }
}

/// Case-insensitive `.zip` extension check.
pub fn looks_like_zip(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

/// A source tree ready for relocation.
#[derive(Debug)]
pub enum ResolvedSource {
    /// User-supplied directory, used in place.
    Directory(PathBuf),
    /// Archive contents unpacked into scratch space; removed on drop.
    Extracted { archive: PathBuf, scratch: TempDir },
}

impl ResolvedSource {
    /// Root directory to walk.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedSource::Directory(p) => p,
            ResolvedSource::Extracted { scratch, .. } => scratch.path(),
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self, ResolvedSource::Extracted { .. })
    }

    /// The archive this tree was unpacked from, if any.
    pub fn archive(&self) -> Option<&Path> {
        match self {
            ResolvedSource::Directory(_) => None,
            ResolvedSource::Extracted { archive, .. } => Some(archive),
        }
    }
}

/// Materialize `spec` as a directory tree.
pub fn resolve_source(spec: SourceSpec) -> Result<ResolvedSource> {
    match spec {
        SourceSpec::Directory(dir) => {
            let meta = match fs::metadata(&dir) {
                Ok(m) => m,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Err(MoverError::SourceNotFound(dir).into());
                }
                Err(e) => return Err(io_error_with_help("read source", &dir)(e)),
            };
            if !meta.is_dir() {
                return Err(MoverError::SourceNotDirectory(dir).into());
            }
            fs::read_dir(&dir).map_err(io_error_with_help("list source directory", &dir))?;
            debug!(path = %dir.display(), "Using source directory in place");
            Ok(ResolvedSource::Directory(dir))
        }
        SourceSpec::ZipArchive(archive) => {
            if !archive.is_file() {
                return Err(MoverError::SourceNotFound(archive).into());
            }
            let scratch = tempfile::Builder::new()
                .prefix("bulk_image_mover.")
                .tempdir()
                .context("create scratch directory for archive extraction")?;
            let count = extract_zip(&archive, scratch.path())?;
            info!(archive = %archive.display(), scratch = %scratch.path().display(), entries = count, "Extracted archive");
            Ok(ResolvedSource::Extracted { archive, scratch })
        }
    }
}

fn archive_error(path: &Path, e: impl std::fmt::Display) -> anyhow::Error {
    MoverError::Archive {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
    .into()
}

/// Unpack every entry of `archive` under `into`, keeping its directory layout.
fn extract_zip(archive: &Path, into: &Path) -> Result<usize> {
    let file = File::open(archive).map_err(io_error_with_help("open archive", archive))?;
    let mut zip = zip::ZipArchive::new(BufReader::new(file)).map_err(|e| archive_error(archive, e))?;
    let count = zip.len();
    // Entries escaping `into` (absolute paths, `..`) are rejected by the zip crate.
    zip.extract(into).map_err(|e| archive_error(archive, e))?;
    Ok(count)
}
