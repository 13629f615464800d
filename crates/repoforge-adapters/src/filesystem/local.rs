//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use repoforge_core::{application::ports::Filesystem, error::RepoforgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> RepoforgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> RepoforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> RepoforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> repoforge_core::error::RepoforgeError {
    use repoforge_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use repoforge_core::error::RepoforgeError;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("file.php");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "<?php\n").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(fs.read_file(&path).unwrap(), "<?php\n");
    }

    #[test]
    fn reading_a_missing_file_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let err = fs.read_file(&dir.path().join("absent.php")).unwrap_err();
        assert!(matches!(err, RepoforgeError::Application(_)));
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b");
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&target).unwrap();
        fs.create_dir_all(&target).unwrap();
        assert!(fs.exists(&target));
    }
}
