//! Output packaging: zip a directory, naming entries by their relative path.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

use crate::fs_ops::io_error_with_help;

/// Write every regular file under `dir` into a deflated zip at `archive_path`.
/// Returns the number of entries written.
pub fn pack_directory(dir: &Path, archive_path: &Path) -> Result<usize> {
    if let Some(parent) = archive_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_error_with_help("create archive directory", parent))?;
    }
    let file = File::create(archive_path).map_err(io_error_with_help("create archive", archive_path))?;
    let archive_real = dunce::canonicalize(archive_path).unwrap_or_else(|_| archive_path.to_path_buf());
    let mut zip = zip::ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut written = 0usize;
    for item in WalkDir::new(dir).sort_by_file_name() {
        let item = item.with_context(|| format!("walk '{}'", dir.display()))?;
        if !item.file_type().is_file() {
            continue;
        }
        // Never pack the archive into itself.
        if dunce::canonicalize(item.path()).is_ok_and(|p| p == archive_real) {
            continue;
        }
        let rel = item
            .path()
            .strip_prefix(dir)
            .with_context(|| format!("relative path for '{}'", item.path().display()))?;
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(name.as_str(), options)
            .with_context(|| format!("start archive entry '{name}'"))?;
        let mut reader = File::open(item.path()).map_err(io_error_with_help("open", item.path()))?;
        io::copy(&mut reader, &mut zip).with_context(|| format!("write archive entry '{name}'"))?;
        debug!(entry = %name, "Packed");
        written += 1;
    }

    zip.finish()
        .with_context(|| format!("finalize archive '{}'", archive_path.display()))?;
    info!(archive = %archive_path.display(), entries = written, "Wrote archive");
    Ok(written)
}
