// /context enable | disable

use std::path::Path;
use tracing::info;

use crate::message::CommandOutput;

/// Holder of the "include local context in prompts" flag.
pub trait LocalContextState {
    fn local_context_enabled(&self) -> bool;
    fn set_local_context_enabled(&mut self, enabled: bool);
}

pub fn enable(state: &mut dyn LocalContextState, context_file: &Path) -> CommandOutput {
    state.set_local_context_enabled(true);
    info!("Local context enabled");
    CommandOutput::info(format!(
        "Local context enabled. Content from {} will be included in prompts.",
        context_file.display()
    ))
}

pub fn disable(state: &mut dyn LocalContextState, context_file: &Path) -> CommandOutput {
    state.set_local_context_enabled(false);
    info!("Local context disabled");
    CommandOutput::info(format!(
        "Local context disabled. Content from {} will NOT be included in prompts.",
        context_file.display()
    ))
}

pub fn status(state: &dyn LocalContextState, context_file: &Path) -> CommandOutput {
    let word = if state.local_context_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    CommandOutput::info(format!(
        "Local context is {}. Context file: {}",
        word,
        context_file.display()
    ))
}
