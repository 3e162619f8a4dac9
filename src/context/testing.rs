// In-memory ContextFs for unit tests
//
// Records every call as "<op> <path>" and can be told to fail any operation
// on a given path, or a single operation on it, with a chosen io::ErrorKind.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::fs::{ContextFs, FileStat};
use crate::errors::FsError;

enum Node {
    File(String),
    Dir,
}

#[derive(Default)]
struct Inner {
    nodes: BTreeMap<PathBuf, Node>,
    failures: HashMap<PathBuf, io::ErrorKind>,
    op_failures: HashMap<(String, PathBuf), io::ErrorKind>,
    calls: Vec<String>,
}

#[derive(Default)]
pub struct MemoryFs {
    inner: Mutex<Inner>,
}

impl MemoryFs {
    pub fn add_dir(&self, path: &str) {
        self.inner
            .lock()
            .unwrap()
            .nodes
            .insert(PathBuf::from(path), Node::Dir);
    }

    pub fn add_file(&self, path: &str, contents: &str) {
        self.inner
            .lock()
            .unwrap()
            .nodes
            .insert(PathBuf::from(path), Node::File(contents.to_string()));
    }

    pub fn fail_on(&self, path: &str, kind: io::ErrorKind) {
        self.inner
            .lock()
            .unwrap()
            .failures
            .insert(PathBuf::from(path), kind);
    }

    /// Fail only `op` ("stat", "read_dir", "read", "write", "remove") on `path`.
    pub fn fail_op_on(&self, op: &str, path: &str, kind: io::ErrorKind) {
        self.inner
            .lock()
            .unwrap()
            .op_failures
            .insert((op.to_string(), PathBuf::from(path)), kind);
    }

    /// True if any write or remove was attempted.
    pub fn mutated(&self) -> bool {
        self.calls()
            .iter()
            .any(|c| c.starts_with("write ") || c.starts_with("remove "))
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn file(&self, path: &str) -> Option<String> {
        match self.inner.lock().unwrap().nodes.get(Path::new(path)) {
            Some(Node::File(contents)) => Some(contents.clone()),
            _ => None,
        }
    }

    fn enter(&self, op: &str, path: &Path) -> Result<std::sync::MutexGuard<'_, Inner>, FsError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(format!("{} {}", op, path.display()));
        let op_kind = inner
            .op_failures
            .get(&(op.to_string(), path.to_path_buf()))
            .copied();
        if let Some(kind) = op_kind.or_else(|| inner.failures.get(path).copied()) {
            return Err(FsError::from_io(path, io::Error::new(kind, "injected failure")));
        }
        Ok(inner)
    }
}

fn not_found(path: &Path) -> FsError {
    FsError::from_io(path, io::Error::from(io::ErrorKind::NotFound))
}

fn other(path: &Path, msg: &str) -> FsError {
    FsError::from_io(path, io::Error::new(io::ErrorKind::Other, msg.to_string()))
}

#[async_trait]
impl ContextFs for MemoryFs {
    async fn stat(&self, path: &Path) -> Result<FileStat, FsError> {
        let inner = self.enter("stat", path)?;
        match inner.nodes.get(path) {
            Some(Node::File(contents)) => Ok(FileStat {
                size: contents.len() as u64,
                is_dir: false,
            }),
            Some(Node::Dir) => Ok(FileStat {
                size: 0,
                is_dir: true,
            }),
            None => Err(not_found(path)),
        }
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<OsString>, FsError> {
        let inner = self.enter("read_dir", path)?;
        match inner.nodes.get(path) {
            Some(Node::Dir) => Ok(inner
                .nodes
                .keys()
                .filter(|p| p.parent() == Some(path))
                .filter_map(|p| p.file_name())
                .map(|n| n.to_os_string())
                .collect()),
            Some(Node::File(_)) => Err(other(path, "not a directory")),
            None => Err(not_found(path)),
        }
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        let inner = self.enter("read", path)?;
        match inner.nodes.get(path) {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Dir) => Err(other(path, "is a directory")),
            None => Err(not_found(path)),
        }
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FsError> {
        let mut inner = self.enter("write", path)?;
        let parent_is_dir = path
            .parent()
            .map(|p| matches!(inner.nodes.get(p), Some(Node::Dir)))
            .unwrap_or(false);
        if !parent_is_dir {
            return Err(not_found(path));
        }
        inner.nodes.insert(
            path.to_path_buf(),
            Node::File(String::from_utf8_lossy(contents).into_owned()),
        );
        Ok(())
    }

    async fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.enter("remove", path)?;
        match inner.nodes.remove(path) {
            Some(Node::File(_)) => Ok(()),
            Some(Node::Dir) => {
                inner.nodes.insert(path.to_path_buf(), Node::Dir);
                Err(other(path, "is a directory"))
            }
            None => Err(not_found(path)),
        }
    }
}
