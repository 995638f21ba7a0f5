//! Per-user JSON configuration.

mod model;
mod store;

pub use model::{Config, ConfigKey, DEFAULT_SPECS_PATH, SpecsConfig};
pub use store::{CONFIG_FILE_NAME, ConfigStore, resolve_default_path};
