//! Single-file move primitive.
//! - Same filesystem: plain rename, then best-effort fsync of the destination dir.
//! - Cross-device: copy into a hidden temp sibling, fsync, rename into place,
//!   reapply permissions/times (best-effort), then remove the source.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::helpers::{io_error_with_help, io_error_with_help_io};
use super::meta::carry_metadata;
use super::util::{fsync_dir, is_cross_device, unique_temp_path};

/// Move `src` to `dest`. The caller has already chosen a free `dest`.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => {
            if let Some(parent) = dest.parent() {
                let _ = fsync_dir(parent);
            }
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(src = %src.display(), dest = %dest.display(), "Cross-device move; copying instead");
            copy_then_remove(src, dest)
        }
        Err(e) => Err(io_error_with_help("rename", src)(e)),
    }
}

fn copy_then_remove(src: &Path, dest: &Path) -> Result<()> {
    copy_then_remove_with(src, dest, carry_metadata)
}

/// Copy fallback with a pluggable metadata step. Metadata is best-effort:
/// once the copy sits at `dest`, a failure there only warns and the source is
/// still removed.
fn copy_then_remove_with<F>(src: &Path, dest: &Path, apply_metadata: F) -> Result<()>
where
    F: FnOnce(&fs::Metadata, &Path) -> Result<()>,
{
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow::anyhow!("destination has no parent: {}", dest.display()))?;
    let src_meta = fs::metadata(src).map_err(io_error_with_help("stat source", src))?;
    let tmp = unique_temp_path(dest_dir);

    if let Err(e) = copy_synced(src, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("copy '{}' -> '{}'", src.display(), tmp.display()));
    }
    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help("rename temporary file into place", dest)(e));
    }
    let _ = fsync_dir(dest_dir);

    if let Err(e) = apply_metadata(&src_meta, dest) {
        warn!(dest = %dest.display(), error = %format!("{e:#}"), "Could not carry over permissions/timestamps");
    }
    fs::remove_file(src).map_err(io_error_with_help("remove original after copy", src))?;
    debug!(src = %src.display(), dest = %dest.display(), bytes = src_meta.len(), "Copied and removed source");
    Ok(())
}

fn copy_synced(src: &Path, tmp: &Path) -> io::Result<()> {
    let mut reader = File::open(src).map_err(io_error_with_help_io("open source", src))?;
    let mut writer = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp)
        .map_err(io_error_with_help_io("create temporary file", tmp))?;
    io::copy(&mut reader, &mut writer)?;
    writer.sync_all()
}
