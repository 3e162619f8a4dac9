// Configuration loader
// Loads settings from ~/.localctx/config.toml, then applies the
// LOCALCTX_CONTEXT_DIR environment override.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, CONTEXT_DIR_ENV};
use super::settings::{Config, FeaturesConfig};

#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    context_dir: Option<String>,
    #[serde(default)]
    features: Option<FeaturesConfig>,
}

/// Load configuration from the user config file and environment
pub fn load_config() -> Result<Config> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(APP_DIR_NAME).join(CONFIG_FILE_NAME);

    let mut config = load_config_from(&config_path, &home)?;
    apply_context_dir_override(&mut config, std::env::var(CONTEXT_DIR_ENV).ok(), &home);

    config
        .validate()
        .context("Configuration validation failed")?;
    Ok(config)
}

/// Load `config_path`, falling back to defaults when it does not exist.
pub fn load_config_from(config_path: &Path, home: &Path) -> Result<Config> {
    let mut config = Config::with_home(home);

    if !config_path.exists() {
        debug!("No config at {}, using defaults", config_path.display());
        return Ok(config);
    }

    let contents = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let toml_config: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    if let Some(dir) = toml_config.context_dir {
        config.context_dir = expand_home(&dir, home);
    }
    if let Some(features) = toml_config.features {
        config.features = features;
    }

    debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Replace the store root when `value` is set and non-empty.
pub fn apply_context_dir_override(config: &mut Config, value: Option<String>, home: &Path) {
    if let Some(dir) = value.filter(|v| !v.trim().is_empty()) {
        debug!("{} overrides context_dir: {}", CONTEXT_DIR_ENV, dir);
        config.context_dir = expand_home(&dir, home);
    }
}

fn expand_home(raw: &str, home: &Path) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None if raw == "~" => home.to_path_buf(),
        None => PathBuf::from(raw),
    }
}
