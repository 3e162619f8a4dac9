// Filesystem seam for the context store
//
// Everything the clear/toggle/prompt paths touch on disk goes through
// `ContextFs`, so the decision logic can be driven by a fake in tests.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

use crate::errors::FsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
    pub is_dir: bool,
}

#[async_trait]
pub trait ContextFs: Send + Sync {
    async fn stat(&self, path: &Path) -> Result<FileStat, FsError>;

    /// Entry names (not full paths) inside `path`, exactly as the OS reports them.
    async fn read_dir(&self, path: &Path) -> Result<Vec<OsString>, FsError>;

    async fn read_to_string(&self, path: &Path) -> Result<String, FsError>;

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FsError>;

    async fn remove_file(&self, path: &Path) -> Result<(), FsError>;
}

/// `ContextFs` backed by `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFs;

#[async_trait]
impl ContextFs for TokioFs {
    async fn stat(&self, path: &Path) -> Result<FileStat, FsError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;
        Ok(FileStat {
            size: meta.len(),
            is_dir: meta.is_dir(),
        })
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<OsString>, FsError> {
        let mut entries = tokio::fs::read_dir(path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| FsError::from_io(path, e))?
        {
            names.push(entry.file_name());
        }
        names.sort();
        debug!("Listed {} entries in {}", names.len(), path.display());
        Ok(names)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FsError::from_io(path, e))
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FsError> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| FsError::from_io(path, e))
    }

    async fn remove_file(&self, path: &Path) -> Result<(), FsError> {
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| FsError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn stat_reports_size_and_kind() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.md");
        fs::write(&file, "hello").unwrap();

        let file_stat = TokioFs.stat(&file).await.unwrap();
        assert_eq!(file_stat, FileStat { size: 5, is_dir: false });

        let dir_stat = TokioFs.stat(tmp.path()).await.unwrap();
        assert!(dir_stat.is_dir);
    }

    #[tokio::test]
    async fn stat_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = TokioFs.stat(&tmp.path().join("nope")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn read_dir_returns_sorted_names() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.png"), [0u8]).unwrap();
        fs::write(tmp.path().join("a.png"), [0u8]).unwrap();

        let names = TokioFs.read_dir(tmp.path()).await.unwrap();
        assert_eq!(names, vec![OsString::from("a.png"), OsString::from("b.png")]);
    }

    #[tokio::test]
    async fn remove_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = TokioFs
            .remove_file(&tmp.path().join("ghost.png"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
