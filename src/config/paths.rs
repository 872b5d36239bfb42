//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BULK_IMAGE_MOVER_CONFIG";

const APP_DIR: &str = "bulk_image_mover";

/// Config file location: `$BULK_IMAGE_MOVER_CONFIG` if set, else the OS config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(p));
    }
    if let Some(base) = config_dir() {
        return Some(base.join(APP_DIR).join("config.xml"));
    }
    env::var_os("HOME").map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join(APP_DIR)
            .join("config.xml")
    })
}

/// Suggested log file location. Sits next to an explicit config file when one
/// is set, otherwise under the OS data dir.
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        let cfg = PathBuf::from(p);
        return cfg.parent().map(|d| d.join(format!("{APP_DIR}.log")));
    }
    if let Some(base) = data_dir() {
        return Some(base.join(APP_DIR).join(format!("{APP_DIR}.log")));
    }
    env::var_os("HOME").map(|h| {
        PathBuf::from(h)
            .join(".local")
            .join("share")
            .join(APP_DIR)
            .join(format!("{APP_DIR}.log"))
    })
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn plain_directories_have_no_symlink_ancestor() {
        let td = tempdir().unwrap();
        let real = dunce::canonicalize(td.path()).unwrap();
        let p = real.join("a").join("b.log");
        assert!(!path_has_symlink_ancestor(&p).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_is_detected() {
        let td = tempdir().unwrap();
        let real = dunce::canonicalize(td.path()).unwrap();
        fs::create_dir(real.join("target")).unwrap();
        std::os::unix::fs::symlink(real.join("target"), real.join("link")).unwrap();
        assert!(path_has_symlink_ancestor(&real.join("link").join("x.log")).unwrap());
    }
}
