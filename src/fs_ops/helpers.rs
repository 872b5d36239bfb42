//! I/O error adapters.
//!
//! Turn a bare io::Error into a message naming the operation, the path and a
//! short hint, for use with `map_err`:
//!
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create destination", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Platform hint for a raw OS error code, if we have one.
fn os_hint(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("source and destination are on different filesystems"),
            libc::ENOENT => Some("path not found; it may have been moved or deleted"),
            libc::EEXIST => Some("a file with this name already exists"),
            libc::ENOSPC => Some("no space left on the destination device"),
            libc::EROFS => Some("read-only filesystem"),
            libc::ENAMETOOLONG => Some("file name too long for the destination filesystem"),
            libc::ENOTDIR => Some("a path component is not a directory"),
            libc::EISDIR => Some("expected a file but found a directory"),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some("access denied; check permissions"),
            17 => Some("source and destination are on different drives"),
            32 => Some("file is in use by another process"),
            2 | 3 => Some("path not found"),
            80 | 183 => Some("a file with this name already exists"),
            112 => Some("not enough space on the destination disk"),
            206 => Some("file name or path too long"),
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied"),
        io::ErrorKind::NotFound => Some("path not found"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{op} '{}': {e}", path.display());
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for anyhow::Result code paths.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code paths; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
