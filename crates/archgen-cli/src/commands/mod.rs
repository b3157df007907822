//! Command handlers.
//!
//! Each submodule exposes a single `execute` function that takes its
//! parsed arguments plus the shared CLI context. Handlers translate
//! between CLI types and `archgen-core` types; no generation logic
//! lives here.

pub mod completions;
pub mod module;
pub mod service;

use std::path::PathBuf;

use archgen_adapters::{LocalFilesystem, StubRenderer};
use archgen_core::application::GenerationService;

use crate::{cli::GlobalArgs, config::AppConfig};

/// Modules root, resolved in priority order: `--root` flag, config
/// file, built-in default.
pub(crate) fn resolve_modules_root(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global
        .root
        .clone()
        .unwrap_or_else(|| config.generator.modules_root.clone())
}

/// Wire a [`GenerationService`] against the real filesystem and the
/// built-in templates.
pub(crate) fn generation_service(root: PathBuf) -> GenerationService {
    GenerationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(StubRenderer::new()),
        root,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global_with_root(root: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            root: root.map(PathBuf::from),
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn flag_overrides_config_root() {
        let root = resolve_modules_root(&global_with_root(Some("backend/modules")), &AppConfig::default());
        assert_eq!(root, PathBuf::from("backend/modules"));
    }

    #[test]
    fn config_default_applies_without_flag() {
        let root = resolve_modules_root(&global_with_root(None), &AppConfig::default());
        assert_eq!(root, PathBuf::from("src/modules"));
    }
}
