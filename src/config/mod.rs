// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod settings;

pub use loader::{apply_context_dir_override, load_config, load_config_from};
pub use settings::{Config, FeaturesConfig};
