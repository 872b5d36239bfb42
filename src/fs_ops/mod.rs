//! Filesystem operations: discovery, naming, moving and the relocation run.

mod atomic;
mod entry;
mod filter;
mod helpers;
mod meta;
mod naming;
mod relocate;
mod util;

pub use atomic::move_file;
pub use entry::{discover, FileEntry};
pub use filter::{ExtensionAllowList, IMAGE_EXTENSIONS};
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use naming::{resolve_destination, split_name, suffixed_name};
pub use relocate::{relocate, relocate_with, RelocationEvent, RelocationOutcome};
