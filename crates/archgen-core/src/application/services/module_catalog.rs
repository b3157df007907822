//! Module discovery and selection.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainError, SHARED_MODULE},
    error::ArchgenResult,
};

/// Read-only view over the module directories under the modules root.
///
/// The reserved `shared` bucket never appears in the listing; shared
/// services bypass the catalog entirely.
pub struct ModuleCatalog<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> ModuleCatalog<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { filesystem, root }
    }

    /// List eligible modules, sorted lexically for stable menu order.
    ///
    /// Fails with [`ApplicationError::ModulesRootMissing`] when the root
    /// is absent and [`ApplicationError::EmptyCatalog`] when nothing
    /// remains after excluding `shared`.
    pub fn list(&self) -> ArchgenResult<Vec<String>> {
        if !self.filesystem.exists(self.root) {
            return Err(ApplicationError::ModulesRootMissing {
                path: self.root.to_path_buf(),
            }
            .into());
        }

        let mut modules: Vec<String> = self
            .filesystem
            .list_dirs(self.root)?
            .into_iter()
            .filter(|name| name != SHARED_MODULE)
            .collect();

        if modules.is_empty() {
            return Err(ApplicationError::EmptyCatalog {
                path: self.root.to_path_buf(),
            }
            .into());
        }

        modules.sort();
        debug!(count = modules.len(), "modules listed");
        Ok(modules)
    }

    /// Pure join of root and module name. Existence is implied by a
    /// prior [`Self::list`] or by the `shared` sentinel bypassing the
    /// catalog.
    pub fn module_path(&self, module: &str) -> PathBuf {
        self.root.join(module)
    }

    /// Resolve a zero-based menu index into a module name.
    pub fn validate_selection(index: usize, modules: &[String]) -> ArchgenResult<&str> {
        modules.get(index).map(String::as_str).ok_or_else(|| {
            DomainError::InvalidSelection {
                index,
                len: modules.len(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchgenError;

    #[test]
    fn selection_within_range_resolves() {
        let modules = vec!["billing".to_string(), "inventory".to_string()];
        assert_eq!(
            ModuleCatalog::validate_selection(1, &modules).unwrap(),
            "inventory"
        );
    }

    #[test]
    fn selection_out_of_range_is_rejected() {
        let modules = vec!["billing".to_string()];
        let err = ModuleCatalog::validate_selection(1, &modules).unwrap_err();
        assert!(matches!(
            err,
            ArchgenError::Domain(DomainError::InvalidSelection { index: 1, len: 1 })
        ));
    }

    #[test]
    fn selection_on_empty_list_is_rejected() {
        assert!(ModuleCatalog::validate_selection(0, &[]).is_err());
    }
}
