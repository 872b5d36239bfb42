//! Configuration: types, default paths, XML loading and validation.
//! Values come from defaults, then an optional XML file, then CLI flags.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor, CONFIG_ENV_VAR};
pub use types::{Config, LogLevel};
pub use validate::RunPlan;
pub use xml::{create_template_config, load_config, load_config_from_xml_path};
