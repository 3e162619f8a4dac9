// Per-REPL session state

use std::sync::Arc;

use crate::config::Config;
use crate::context::{ContextClearer, ContextFs, ContextPaths, LocalContextState};

/// Everything a slash command needs, passed explicitly instead of living in
/// process-wide state.
pub struct Session {
    fs: Arc<dyn ContextFs>,
    paths: ContextPaths,
    local_context_enabled: bool,
}

impl Session {
    pub fn new(fs: Arc<dyn ContextFs>, config: &Config) -> Self {
        Self {
            fs,
            paths: config.context_paths(),
            local_context_enabled: config.features.local_context_enabled,
        }
    }

    pub fn fs(&self) -> &dyn ContextFs {
        self.fs.as_ref()
    }

    pub fn paths(&self) -> &ContextPaths {
        &self.paths
    }

    pub fn clearer(&self) -> ContextClearer {
        ContextClearer::new(Arc::clone(&self.fs), self.paths.clone())
    }
}

impl LocalContextState for Session {
    fn local_context_enabled(&self) -> bool {
        self.local_context_enabled
    }

    fn set_local_context_enabled(&mut self, enabled: bool) {
        self.local_context_enabled = enabled;
    }
}
