//! Core library for `bulk_image_mover`.
//!
//! The heart of the crate is the relocator in [`fs_ops`]: walk a source tree,
//! optionally keep only allow-listed extensions, and move every file into one
//! flat destination, renaming `name.ext` to `name_1.ext`, `name_2.ext`, ... when
//! the destination already holds that name.
//!
//! Around it sit thin collaborators: [`archive`] (zip input extraction into a
//! scoped scratch directory, zip output packaging), [`config`] (XML file +
//! CLI overrides) and [`output`] (user-facing console lines).

pub mod archive;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;

pub use archive::{pack_directory, resolve_source, ResolvedSource, SourceSpec};
pub use config::{
    default_config_path, default_log_path, load_config_from_xml_path, path_has_symlink_ancestor,
    Config, LogLevel, RunPlan, CONFIG_ENV_VAR,
};
pub use errors::MoverError;
pub use fs_ops::{
    relocate, relocate_with, ExtensionAllowList, FileEntry, RelocationEvent, RelocationOutcome,
};
