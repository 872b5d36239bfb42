//! Collision-avoiding destination names.
//!
//! Policy: keep the base name when the destination has no entry of that name;
//! otherwise try `stem_1.ext`, `stem_2.ext`, ... and take the first free one.
//!
//! Notes:
//! - Only names physically present in the destination count. Nothing is
//!   reserved in memory, so a pre-existing `photo_1.jpg` pushes the next
//!   incoming `photo.jpg` to `photo_2.jpg`.
//! - The search is unbounded; a destination pre-filled with a long run of
//!   suffixed names just makes it slower.
//! - Check-then-move is not atomic; a single writer is assumed.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Split a base name into (stem, extension-with-dot).
///
/// The extension starts at the last dot; leading dots belong to the stem.
/// Examples: `photo.jpg` -> (`photo`, `.jpg`), `archive.tar.gz` -> (`archive.tar`, `.gz`),
/// `.env` -> (`.env`, ``), `..jpg` -> (`..jpg`, ``), `README` -> (`README`, ``).
pub fn split_name(name: &OsStr) -> (OsString, OsString) {
    let (stem, ext) = split_at_extension(name);
    (stem.to_os_string(), ext.to_os_string())
}

/// Borrowing form of [`split_name`].
pub(super) fn split_at_extension(name: &OsStr) -> (&OsStr, &OsStr) {
    let bytes = name.as_encoded_bytes();
    let leading = bytes.iter().take_while(|&&b| b == b'.').count();
    match bytes[leading..].iter().rposition(|&b| b == b'.') {
        Some(pos) => {
            let at = leading + pos;
            // SAFETY: `at` is the index of an ASCII '.', a valid split point
            // for encoded OsStr bytes.
            unsafe {
                (
                    OsStr::from_encoded_bytes_unchecked(&bytes[..at]),
                    OsStr::from_encoded_bytes_unchecked(&bytes[at..]),
                )
            }
        }
        None => (name, OsStr::new("")),
    }
}

/// Build `"{stem}_{n}{ext}"` preserving non-UTF-8 bytes.
pub fn suffixed_name(stem: &OsStr, ext: &OsStr, n: u64) -> OsString {
    let mut name = OsString::with_capacity(stem.len() + ext.len() + 8);
    name.push(stem);
    name.push(format!("_{n}"));
    name.push(ext);
    name
}

/// Any directory entry (file, dir, dangling symlink) occupies the name.
fn occupied(p: &Path) -> bool {
    std::fs::symlink_metadata(p).is_ok()
}

/// Pick the destination path for `name` inside `dst_dir`.
///
/// Returns the path and whether it had to be suffixed.
pub fn resolve_destination(dst_dir: &Path, name: &OsStr) -> (PathBuf, bool) {
    let candidate = dst_dir.join(name);
    if !occupied(&candidate) {
        return (candidate, false);
    }

    let (stem, ext) = split_name(name);
    let mut n: u64 = 1;
    loop {
        let next = dst_dir.join(suffixed_name(&stem, &ext, n));
        if !occupied(&next) {
            return (next, true);
        }
        if n % 1000 == 0 {
            trace!(name = ?name, dir = %dst_dir.display(), tries = n, "still searching for a free suffix");
        }
        n += 1;
    }
}
