// Project-wide constants
//
// Centralised here so file names and env vars have one source of truth.
// Import via `use crate::config::constants::*;`.

/// Per-user directory under $HOME holding config.toml and the default store.
pub const APP_DIR_NAME: &str = ".localctx";

/// Config file inside `APP_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default store root inside `APP_DIR_NAME`.
pub const DEFAULT_CONTEXT_DIR_NAME: &str = "context";

/// Markdown file whose content is injected into prompts.
pub const CONTEXT_FILE_NAME: &str = "context.md";

/// Directory of downloaded images next to the context file.
pub const IMAGES_DIR_NAME: &str = "images";

/// Overrides the store root from config.toml.
pub const CONTEXT_DIR_ENV: &str = "LOCALCTX_CONTEXT_DIR";
