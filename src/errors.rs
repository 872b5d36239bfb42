//! Typed error definitions for bulk_image_mover.
//! Provides the well-known failure modes so the CLI can log them with a stable code.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoverError {
    #[error("No source folder or archive was provided")]
    MissingSource,

    #[error("No destination folder was provided (and no output archive requested)")]
    MissingDestination,

    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {0}")]
    SourceNotDirectory(PathBuf),

    #[error("Destination exists but is not a directory: {0}")]
    DestinationNotDirectory(PathBuf),

    #[error("Source and destination resolve to the same directory: {0}")]
    SameSourceAndDestination(PathBuf),

    #[error("Cannot read archive {path}: {message}")]
    Archive { path: PathBuf, message: String },

    #[error("Failed to move {src} -> {dest}: {message}")]
    Move {
        src: PathBuf,
        dest: PathBuf,
        message: String,
    },
}

impl MoverError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            MoverError::MissingSource => 10,
            MoverError::MissingDestination => 11,
            MoverError::SourceNotFound(_) => 20,
            MoverError::SourceNotDirectory(_) => 21,
            MoverError::DestinationNotDirectory(_) => 22,
            MoverError::SameSourceAndDestination(_) => 23,
            MoverError::Archive { .. } => 30,
            MoverError::Move { .. } => 40,
        }
    }

    /// Short machine-friendly kind, used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            MoverError::MissingSource => "missing_source",
            MoverError::MissingDestination => "missing_destination",
            MoverError::SourceNotFound(_) => "source_not_found",
            MoverError::SourceNotDirectory(_) => "source_not_directory",
            MoverError::DestinationNotDirectory(_) => "destination_not_directory",
            MoverError::SameSourceAndDestination(_) => "same_source_and_destination",
            MoverError::Archive { .. } => "archive",
            MoverError::Move { .. } => "move_failed",
        }
    }

    /// True for problems detected before any filesystem work starts.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MoverError::MissingSource
                | MoverError::MissingDestination
                | MoverError::SameSourceAndDestination(_)
        )
    }
}
