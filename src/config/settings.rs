// Configuration structs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::constants::{APP_DIR_NAME, DEFAULT_CONTEXT_DIR_NAME};
use crate::context::ContextPaths;

/// Feature flags configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Include the local context file in prompts when the REPL starts.
    /// Toggled per session with /context enable|disable.
    #[serde(default = "default_true")]
    pub local_context_enabled: bool,

    /// Enable debug logging for troubleshooting
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            local_context_enabled: true,
            debug_logging: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the context store (context.md + images/)
    pub context_dir: PathBuf,

    /// Feature flags (optional behaviors)
    pub features: FeaturesConfig,
}

impl Config {
    /// Defaults rooted at `home`: the store lives in ~/.localctx/context.
    pub fn with_home(home: &Path) -> Self {
        Self {
            context_dir: home.join(APP_DIR_NAME).join(DEFAULT_CONTEXT_DIR_NAME),
            features: FeaturesConfig::default(),
        }
    }

    pub fn context_paths(&self) -> ContextPaths {
        ContextPaths::from_root(&self.context_dir)
    }

    /// Validate configuration and return helpful errors
    pub fn validate(&self) -> Result<()> {
        if self.context_dir.as_os_str().is_empty() {
            bail!("context_dir must not be empty");
        }
        if self.context_dir.parent().is_none() {
            bail!(
                "context_dir must not be the filesystem root ({})",
                self.context_dir.display()
            );
        }
        Ok(())
    }
}
