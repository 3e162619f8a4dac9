// Context store layout and state inspection
//
// The store is a root directory holding one markdown context file and an
// images directory. Its state is never persisted; it is read fresh from
// disk each time a command needs it.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::fs::ContextFs;
use crate::config::constants::{CONTEXT_FILE_NAME, IMAGES_DIR_NAME};
use crate::errors::FsError;

/// Filesystem locations that make up the context store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPaths {
    pub root: PathBuf,
    pub context_file: PathBuf,
    pub images_dir: PathBuf,
}

impl ContextPaths {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            context_file: root.join(CONTEXT_FILE_NAME),
            images_dir: root.join(IMAGES_DIR_NAME),
            root,
        }
    }
}

/// One of the two locations inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePart {
    ContextFile,
    ImagesDirectory,
}

impl fmt::Display for StorePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorePart::ContextFile => write!(f, "{} file", CONTEXT_FILE_NAME),
            StorePart::ImagesDirectory => write!(f, "{} directory", IMAGES_DIR_NAME),
        }
    }
}

/// Join parts as "a" or "a and b".
pub fn describe_parts(parts: &[StorePart]) -> String {
    parts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Existence and emptiness of both store locations at inspection time.
///
/// `image_names` is the listing taken during inspection; it doubles as the
/// deletion target list so the directory is only read once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub file_exists: bool,
    pub file_is_empty: bool,
    pub dir_exists: bool,
    pub image_names: Vec<OsString>,
}

impl StoreSnapshot {
    pub fn image_count(&self) -> usize {
        self.image_names.len()
    }

    pub fn dir_is_empty(&self) -> bool {
        self.image_names.is_empty()
    }

    /// True when the store holds nothing, whether or not both parts exist.
    pub fn is_empty(&self) -> bool {
        self.file_is_empty && self.dir_is_empty()
    }

    pub fn missing_parts(&self) -> Vec<StorePart> {
        let mut missing = Vec::new();
        if !self.file_exists {
            missing.push(StorePart::ContextFile);
        }
        if !self.dir_exists {
            missing.push(StorePart::ImagesDirectory);
        }
        missing
    }
}

/// Result of inspecting the store before any decision is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreState {
    /// Root directory is absent; nothing else was looked at.
    RootMissing,
    /// The images path exists but is a regular file.
    ImagesNotDirectory,
    Ready(StoreSnapshot),
}

/// Inspect root, context file, then images directory, in that order.
pub async fn inspect(fs: &dyn ContextFs, paths: &ContextPaths) -> Result<StoreState, FsError> {
    match fs.stat(&paths.root).await {
        Ok(_) => {}
        Err(e) if e.is_not_found() => {
            debug!("Context root {} does not exist", paths.root.display());
            return Ok(StoreState::RootMissing);
        }
        Err(e) => return Err(e),
    }

    let mut snapshot = StoreSnapshot {
        file_is_empty: true,
        ..StoreSnapshot::default()
    };

    match fs.stat(&paths.context_file).await {
        Ok(stat) => {
            snapshot.file_exists = true;
            snapshot.file_is_empty = stat.size == 0;
        }
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    match inspect_images(fs, &paths.images_dir).await? {
        ImagesState::Missing => {}
        ImagesState::NotDirectory => return Ok(StoreState::ImagesNotDirectory),
        ImagesState::Listed(names) => {
            snapshot.dir_exists = true;
            snapshot.image_names = names;
        }
    }

    debug!(
        "Context store snapshot: file_exists={} file_is_empty={} dir_exists={} images={}",
        snapshot.file_exists,
        snapshot.file_is_empty,
        snapshot.dir_exists,
        snapshot.image_count()
    );

    Ok(StoreState::Ready(snapshot))
}

enum ImagesState {
    Missing,
    NotDirectory,
    Listed(Vec<OsString>),
}

async fn inspect_images(fs: &dyn ContextFs, images_dir: &Path) -> Result<ImagesState, FsError> {
    let stat = match fs.stat(images_dir).await {
        Ok(stat) => stat,
        Err(e) if e.is_not_found() => return Ok(ImagesState::Missing),
        Err(e) => return Err(e),
    };

    if !stat.is_dir {
        return Ok(ImagesState::NotDirectory);
    }

    match fs.read_dir(images_dir).await {
        Ok(names) => Ok(ImagesState::Listed(names)),
        // Removed between stat and listing.
        Err(e) if e.is_not_found() => Ok(ImagesState::Missing),
        Err(e) => Err(e),
    }
}
