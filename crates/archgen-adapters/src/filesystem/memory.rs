//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use archgen_core::{application::ports::Filesystem, error::ArchgenResult};

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so a test can hand one clone to
/// the service under test and inspect writes through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths currently present, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Number of files written so far.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Pre-seed a file without going through the port (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.to_string());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ArchgenResult<()> {
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ArchgenResult<()> {
        let mut inner = self.inner.write().unwrap();

        // Mirror std::fs::write: the parent must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(archgen_core::application::ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn list_dirs(&self, path: &Path) -> ArchgenResult<Vec<String>> {
        let inner = self.inner.read().unwrap();

        Ok(inner
            .directories
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name())
            .filter_map(|name| name.to_str())
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.py"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.py"), "x").is_ok());
        assert_eq!(fs.read_file(Path::new("a/b.py")).as_deref(), Some("x"));
    }

    #[test]
    fn create_dir_all_registers_intermediates() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("src/modules/billing")).unwrap();
        assert!(fs.exists(Path::new("src")));
        assert!(fs.exists(Path::new("src/modules")));
        assert!(fs.exists(Path::new("src/modules/billing")));
    }

    #[test]
    fn list_dirs_returns_immediate_children_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("root/billing/dtos")).unwrap();
        fs.create_dir_all(Path::new("root/inventory")).unwrap();

        let dirs = fs.list_dirs(Path::new("root")).unwrap();
        assert_eq!(dirs, vec!["billing".to_string(), "inventory".to_string()]);
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("m")).unwrap();
        fs.write_file(Path::new("m/a.py"), "pass").unwrap();
        assert_eq!(view.file_count(), 1);
    }
}
