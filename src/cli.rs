//! CLI definition and parsing.
//!
//! Notes:
//! - SOURCE may be a folder or a `.zip` (detected by extension).
//! - DEST may be omitted when SOURCE is a `.zip` and `--output-archive` is given;
//!   files are then collected in a scratch folder that only lives until the
//!   archive is written. A folder SOURCE always needs DEST.
//! - `--ext` implies `--images-only` with a custom allow-list.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};
use crate::fs_ops::ExtensionAllowList;

/// Flatten every image under a folder (or zip of folders) into one folder.
/// CLI flags override config file values.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Collect files from a folder tree into one flat folder without overwriting"
)]
pub struct Args {
    /// Folder to collect from, or a .zip archive of folders.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::AnyPath)]
    pub source: Option<PathBuf>,

    /// Flat destination folder (created if missing).
    #[arg(value_name = "DEST", value_hint = ValueHint::DirPath)]
    pub destination: Option<PathBuf>,

    /// After moving, pack the destination into this zip archive.
    #[arg(short = 'o', long, value_name = "ZIP", value_hint = ValueHint::FilePath)]
    pub output_archive: Option<PathBuf>,

    /// Only move images (.jpg .jpeg .png .gif .bmp .tiff .webp); leave other files in place.
    #[arg(short = 'i', long)]
    pub images_only: bool,

    /// Custom extension allow-list (comma separated, e.g. `jpg,heic`). Implies --images-only.
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Print one line per moved or skipped file.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where the config file is looked up, then exit.
    #[arg(long)]
    pub print_config: bool,

    /// Write a template config file at the default location, then exit.
    #[arg(long, conflicts_with = "print_config")]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(p) = &self.source {
            cfg.source = Some(sanitize_path(p));
        }
        if let Some(p) = &self.destination {
            cfg.destination = Some(sanitize_path(p));
        }
        if let Some(p) = &self.output_archive {
            cfg.output_archive = Some(sanitize_path(p));
        }
        if self.images_only {
            cfg.images_only = true;
        }
        let custom: ExtensionAllowList = self.extensions.iter().collect();
        if !custom.is_empty() {
            cfg.image_extensions = custom;
            cfg.images_only = true;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(p) = &self.log_file {
            cfg.log_file = Some(p.clone());
        }
    }
}

/// Strip quotes a shell (PowerShell/CMD) left around a path and one trailing separator.
fn sanitize_path(p: &Path) -> PathBuf {
    let raw = p.to_string_lossy();
    let trimmed = raw.trim();
    let mut inner: String = trimmed.trim_matches(|c| c == '\'' || c == '"').to_string();
    if inner.len() > 1 && (inner.ends_with('/') || inner.ends_with('\\')) {
        inner.pop();
    }
    if inner == raw {
        // Untouched: keep the original (may be non-UTF-8).
        return p.to_path_buf();
    }
    PathBuf::from(inner)
}

pub fn parse() -> Args {
    Args::parse()
}
