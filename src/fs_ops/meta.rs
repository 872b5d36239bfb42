//! Metadata carry-over for the copy fallback.
//! A rename keeps metadata for free; a copy needs permissions and times reapplied.

use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::Path;

pub(super) fn carry_metadata(src_meta: &fs::Metadata, dest: &Path) -> Result<()> {
    let atime = FileTime::from_last_access_time(src_meta);
    let mtime = FileTime::from_last_modification_time(src_meta);
    set_file_times(dest, atime, mtime)
        .with_context(|| format!("set timestamps on '{}'", dest.display()))?;

    fs::set_permissions(dest, src_meta.permissions())
        .with_context(|| format!("set permissions on '{}'", dest.display()))?;
    Ok(())
}
