//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generation pipeline needs from external
//! systems. The `archgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{LayerKind, RenderContext};
use crate::error::ArchgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `archgen_adapters::filesystem::LocalFilesystem` (production)
/// - `archgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Creating an
    /// existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> ArchgenResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ArchgenResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, in filesystem
    /// enumeration order (callers sort when determinism matters).
    fn list_dirs(&self, path: &Path) -> ArchgenResult<Vec<String>>;
}

/// Port for rendering the per-layer service body templates.
///
/// Implemented by `archgen_adapters::renderer::StubRenderer` over the
/// built-in templates. Four template keys exist, one per [`LayerKind`].
pub trait TemplateRenderer: Send + Sync {
    /// Render the service body for `layer` with the given context.
    fn render(&self, layer: LayerKind, context: &RenderContext) -> ArchgenResult<String>;
}
