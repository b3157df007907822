//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use archgen_core::{application::ports::Filesystem, error::ArchgenResult};

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
    fn create_dir_all(&self, path: &Path) -> ArchgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ArchgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dirs(&self, path: &Path) -> ArchgenResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let is_dir = entry
                .file_type()
                .map_err(|e| map_io_error(path, e, "stat directory entry"))?
                .is_dir();
            if is_dir {
                if let Some(name) = entry.file_name().to_str() {
                    dirs.push(name.to_string());
                }
            }
        }
        Ok(dirs)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> archgen_core::error::ArchgenError {
    use archgen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_dirs_skips_files() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("billing")).unwrap();
        std::fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let fs = LocalFilesystem::new();
        let dirs = fs.list_dirs(temp.path()).unwrap();
        assert_eq!(dirs, vec!["billing".to_string()]);
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("a/b/c");

        let fs = LocalFilesystem::new();
        fs.create_dir_all(&target).unwrap();
        fs.create_dir_all(&target).unwrap();
        assert!(fs.exists(&target));
    }

    #[test]
    fn write_then_exists() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("x.py");

        let fs = LocalFilesystem::new();
        fs.write_file(&file, "pass\n").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "pass\n");
    }

    #[test]
    fn list_dirs_on_missing_path_is_an_error() {
        let fs = LocalFilesystem::new();
        assert!(fs.list_dirs(Path::new("/no/such/dir/archgen")).is_err());
    }
}
