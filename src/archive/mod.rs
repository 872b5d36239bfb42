//! Archive plumbing around the relocator.
//! - `extract`: turn a `SourceSpec` (folder or zip) into a directory tree, owning
//!   any scratch space it had to create.
//! - `pack`: zip a (flattened) destination directory for download.

mod extract;
mod pack;

pub use extract::{looks_like_zip, resolve_source, ResolvedSource, SourceSpec};
pub use pack::pack_directory;
