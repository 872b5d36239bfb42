//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request (`--init-config`).
//!
//! Notes:
//! - A missing file is not an error; defaults apply.
//! - Unknown elements are rejected so typos surface instead of being ignored.

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use crate::fs_ops::{ExtensionAllowList, IMAGE_EXTENSIONS};
use crate::platform::{set_dir_mode_0700, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    source: Option<String>,
    destination: Option<String>,
    output_archive: Option<String>,
    images_only: Option<String>,
    /// Comma or whitespace separated, e.g. "jpg, png .heic"
    image_extensions: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn trimmed_path(s: Option<&str>) -> Option<PathBuf> {
    let t = s?.trim();
    if t.is_empty() { None } else { Some(PathBuf::from(t)) }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Split "jpg, png .heic" into individual extensions.
pub(crate) fn split_extensions(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
}

fn xml_to_config(parsed: XmlConfig, origin: &Path) -> Result<Config> {
    let mut cfg = Config {
        source: trimmed_path(parsed.source.as_deref()),
        destination: trimmed_path(parsed.destination.as_deref()),
        output_archive: trimmed_path(parsed.output_archive.as_deref()),
        log_file: trimmed_path(parsed.log_file.as_deref()),
        ..Config::default()
    };

    if let Some(raw) = parsed.images_only.as_deref() {
        match parse_bool(raw) {
            Some(b) => cfg.images_only = b,
            None => bail!(
                "invalid <images_only> value '{}' in {}; expected true or false",
                raw.trim(),
                origin.display()
            ),
        }
    }
    if let Some(raw) = parsed.image_extensions.as_deref() {
        let list: ExtensionAllowList = split_extensions(raw).collect();
        if !list.is_empty() {
            cfg.image_extensions = list;
        }
    }
    if let Some(raw) = parsed.log_level.as_deref() {
        cfg.log_level = raw
            .parse::<LogLevel>()
            .map_err(|e| anyhow::anyhow!("{e} in {}", origin.display()))?;
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed, path)
}

/// Load the config from `$BULK_IMAGE_MOVER_CONFIG` or the default location.
///
/// Returns Ok(None) when no file exists there. An explicitly named file that
/// is missing is an error.
pub fn load_config() -> Result<Option<Config>> {
    let explicit = std::env::var_os(super::paths::CONFIG_ENV_VAR).is_some_and(|v| !v.is_empty());
    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        if explicit {
            bail!("config file named by {} does not exist: {}", super::paths::CONFIG_ENV_VAR, path.display());
        }
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(None);
    }
    let cfg = load_config_from_xml_path(&path)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(Some(cfg))
}

/// Write a commented template config to `path`. Refuses to overwrite.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config file already exists: {}", path.display());
    }
    if path_has_symlink_ancestor(path)? {
        bail!("Refusing to create config: ancestor of {} is a symlink", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create '{}'", parent.display()))?;
        let _ = set_dir_mode_0700(parent);
    }

    let content = format!(
        "<!--\n  bulk_image_mover configuration (XML)\n\n    source            -> folder (or .zip) to collect files from\n    destination       -> flat folder receiving every file\n    output_archive    -> optional zip written from the destination afterwards\n    images_only       -> true/false; only move files with an allowed extension\n    image_extensions  -> comma separated allow-list used by images_only\n    log_level         -> quiet | normal | info | debug\n    log_file          -> optional log file path\n\n  CLI flags override these values.\n-->\n<config>\n  <source></source>\n  <destination></destination>\n  <images_only>false</images_only>\n  <image_extensions>{}</image_extensions>\n  <log_level>normal</log_level>\n</config>\n",
        IMAGE_EXTENSIONS.join(",")
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    info!("Created template config at {}", path.display());
    Ok(())
}
