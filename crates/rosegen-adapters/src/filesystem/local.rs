//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use rosegen_core::{
    application::ports::Filesystem,
    error::{ScaffoldError, ScaffoldResult},
};

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
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        // std::fs::create_dir_all is already a no-op on existing directories.
        std::fs::create_dir_all(path).map_err(|e| dir_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| write_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn dir_error(path: &Path, e: io::Error) -> ScaffoldError {
    ScaffoldError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

fn write_error(path: &Path, e: io::Error) -> ScaffoldError {
    ScaffoldError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories_idempotently() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let nested = tmp.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call over the existing chain succeeds.
        fs.create_dir_all(&nested).unwrap();
    }

    #[test]
    fn writes_and_reports_existence() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = tmp.path().join("out.cs");

        assert!(!fs.exists(&file));
        fs.write_file(&file, "class A {}").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "class A {}");
    }

    #[test]
    fn directory_creation_failure_carries_the_path() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        // A regular file where a directory is needed.
        let err = fs.create_dir_all(&blocker.join("child")).unwrap_err();
        match err {
            ScaffoldError::DirectoryCreationFailed { path, .. } => {
                assert_eq!(path, blocker.join("child"));
            }
            other => panic!("expected DirectoryCreationFailed, got {other:?}"),
        }
    }

    #[test]
    fn write_failure_carries_the_path() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let missing_parent = tmp.path().join("no-such-dir/out.cs");

        let err = fs.write_file(&missing_parent, "x").unwrap_err();
        assert!(matches!(err, ScaffoldError::WriteFailed { path, .. } if path == missing_parent));
    }
}
