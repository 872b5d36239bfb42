//! Config validation.
//! Checks everything that can be known before touching the filesystem and
//! turns a Config into a RunPlan. Nothing here creates or moves anything.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::archive::SourceSpec;
use crate::errors::MoverError;
use crate::fs_ops::ExtensionAllowList;

use super::types::Config;

/// A validated, ready-to-run request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub source: SourceSpec,
    /// None only for a zip source with an output archive: relocate into a
    /// scratch dir and only ship the archive.
    pub destination: Option<PathBuf>,
    pub output_archive: Option<PathBuf>,
    pub filter: Option<ExtensionAllowList>,
}

fn real(p: &Path) -> PathBuf {
    dunce::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}

impl Config {
    /// Validate required paths and build the run plan.
    pub fn validate(&self) -> Result<RunPlan> {
        let source = match &self.source {
            Some(p) => SourceSpec::from_path(p.clone()),
            None => {
                error!("No source provided");
                return Err(MoverError::MissingSource.into());
            }
        };

        // Only a zip source may relocate into scratch space.
        let scratch_ok = matches!(source, SourceSpec::ZipArchive(_)) && self.output_archive.is_some();
        if self.destination.is_none() && !scratch_ok {
            error!("No destination provided");
            return Err(MoverError::MissingDestination.into());
        }

        if let Some(dest) = &self.destination {
            if dest.exists() && !dest.is_dir() {
                error!("destination exists but isn't a directory: {}", dest.display());
                return Err(MoverError::DestinationNotDirectory(dest.clone()).into());
            }
            if let SourceSpec::Directory(src) = &source {
                let src_real = real(src);
                if src_real == real(dest) {
                    error!("source and destination resolve to the same path: {}", src_real.display());
                    return Err(MoverError::SameSourceAndDestination(src_real).into());
                }
            }
        }

        let filter = self.images_only.then(|| {
            if self.image_extensions.is_empty() {
                ExtensionAllowList::images()
            } else {
                self.image_extensions.clone()
            }
        });

        let plan = RunPlan {
            source,
            destination: self.destination.clone(),
            output_archive: self.output_archive.clone(),
            filter,
        };
        debug!(?plan, "Config validated");
        Ok(plan)
    }
}
