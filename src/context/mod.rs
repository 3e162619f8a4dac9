// Local context store
//
// A root directory holding a markdown context file (injected into prompts
// when enabled) and a directory of downloaded images.

pub mod clearer;
pub mod fs;
pub mod prompt;
pub mod store;
pub mod toggle;

#[cfg(test)]
pub(crate) mod testing;

pub use clearer::{classify, ClearOutcome, ContextClearer};
pub use fs::{ContextFs, FileStat, TokioFs};
pub use prompt::build_prompt;
pub use store::{inspect, ContextPaths, StorePart, StoreSnapshot, StoreState};
pub use toggle::LocalContextState;
