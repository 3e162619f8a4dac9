// /clearcontext: empty the context file and delete downloaded images
//
// The decision is made by `classify`, a pure function over the inspected
// snapshot. `ContextClearer::clear` gathers the snapshot, applies the side
// effects for the chosen outcome and renders the user-facing summary.

use futures::future::try_join_all;
use std::ffi::OsString;
use std::sync::Arc;
use tracing::{error, info};

use super::fs::ContextFs;
use super::store::{
    describe_parts, inspect, ContextPaths, StorePart, StoreSnapshot, StoreState,
};
use crate::errors::FsError;
use crate::message::CommandOutput;

pub const NOTHING_TO_CLEAR: &str = "Local context directory does not exist; nothing to clear.";
pub const ALREADY_EMPTY: &str = "Local context is already empty. Nothing to clear.";
pub const IMAGES_NOT_DIRECTORY: &str =
    "Error: Context images path exists but is not a directory.";

/// What `clear` decided to do with an inspected store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Both parts exist and hold nothing.
    AlreadyEmpty,
    /// At least one part is missing and whatever exists is empty.
    IncompleteButEmpty { missing: Vec<StorePart> },
    /// Something needs clearing. `missing` is non-empty when the store was
    /// only partially present.
    HasContent {
        truncate_file: bool,
        delete_images: bool,
        missing: Vec<StorePart>,
    },
}

pub fn classify(snapshot: &StoreSnapshot) -> ClearOutcome {
    let missing = snapshot.missing_parts();

    if missing.is_empty() && snapshot.is_empty() {
        return ClearOutcome::AlreadyEmpty;
    }

    if !missing.is_empty() && snapshot.is_empty() {
        return ClearOutcome::IncompleteButEmpty { missing };
    }

    ClearOutcome::HasContent {
        truncate_file: !snapshot.file_is_empty,
        delete_images: !snapshot.dir_is_empty(),
        missing,
    }
}

pub struct ContextClearer {
    fs: Arc<dyn ContextFs>,
    paths: ContextPaths,
}

impl ContextClearer {
    pub fn new(fs: Arc<dyn ContextFs>, paths: ContextPaths) -> Self {
        Self { fs, paths }
    }

    /// Clear the store. Never fails; I/O errors come back as an error message.
    pub async fn clear(&self) -> CommandOutput {
        match self.try_clear().await {
            Ok(output) => output,
            Err(e) => {
                error!("Error clearing local context: {}", e);
                CommandOutput::error(format!("Failed to clear local context: {}", e))
            }
        }
    }

    async fn try_clear(&self) -> Result<CommandOutput, FsError> {
        let snapshot = match inspect(self.fs.as_ref(), &self.paths).await? {
            StoreState::RootMissing => return Ok(CommandOutput::info(NOTHING_TO_CLEAR)),
            StoreState::ImagesNotDirectory => return Ok(CommandOutput::error(IMAGES_NOT_DIRECTORY)),
            StoreState::Ready(snapshot) => snapshot,
        };

        match classify(&snapshot) {
            ClearOutcome::AlreadyEmpty => Ok(CommandOutput::info(ALREADY_EMPTY)),
            ClearOutcome::IncompleteButEmpty { missing } => Ok(CommandOutput::info(format!(
                "Local context is incomplete (missing: {}), but there was nothing to clear.",
                describe_parts(&missing)
            ))),
            ClearOutcome::HasContent {
                truncate_file,
                delete_images,
                missing,
            } => {
                let mut messages = Vec::new();

                if truncate_file {
                    self.fs.write_file(&self.paths.context_file, b"").await?;
                    info!("Truncated {}", self.paths.context_file.display());
                    messages.push("Local context file has been cleared.".to_string());
                }

                if delete_images {
                    let deleted = self.delete_images(&snapshot.image_names).await?;
                    messages.push(format!("Deleted {} downloaded image(s).", deleted));
                }

                if !missing.is_empty() {
                    messages.push(format!(
                        "(Warning: The context was incomplete, missing the {}.)",
                        describe_parts(&missing)
                    ));
                }

                Ok(CommandOutput::info(messages.join(" ")))
            }
        }
    }

    /// Remove every listed entry concurrently. The first failure aborts.
    async fn delete_images(&self, names: &[OsString]) -> Result<usize, FsError> {
        let fs = self.fs.as_ref();
        let deletions = names.iter().map(|name| {
            let path = self.paths.images_dir.join(name);
            async move { fs.remove_file(&path).await }
        });
        try_join_all(deletions).await?;

        info!(
            "Deleted {} image(s) from {}",
            names.len(),
            self.paths.images_dir.display()
        );
        Ok(names.len())
    }
}
