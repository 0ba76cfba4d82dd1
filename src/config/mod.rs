//! Generator configuration.
//!
//! Values come from `.handler-typings.toml` (discovered in the working
//! directory or its ancestors, or passed explicitly), with command-line flags
//! layered on top.

mod core;
mod loader;

pub use self::core::{default_max_arity, GeneratorConfig, DEFAULT_MAX_ARITY};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
};

pub const CONFIG_FILE_NAME: &str = ".handler-typings.toml";
