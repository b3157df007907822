//! Generation Service - main application orchestrator.
//!
//! Sequences one generation request:
//! 1. Resolve the module path (`shared` bypasses the catalog)
//! 2. Emit the DTO pair when requested
//! 3. Emit the service file
//! 4. Report the resulting paths
//!
//! The first failing step aborts the rest. DTO files already written
//! when the service emission fails stay on disk; there is no rollback.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer},
        services::{DtoEmitter, ModuleCatalog, ServiceEmitter},
    },
    domain::{SHARED_MODULE, ServiceConfig, ServiceNames, naming},
    error::ArchgenResult,
};

/// Paths and names produced by one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// DTO directory, present only when DTOs were generated.
    pub dto_dir: Option<PathBuf>,
    /// Final service file path.
    pub service_path: PathBuf,
    /// The derived naming set, for display.
    pub names: ServiceNames,
}

/// Main generation service.
///
/// Owns the driven ports; one instance serves any number of sequential
/// requests. All work is synchronous and single-threaded.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    modules_root: PathBuf,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        modules_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            modules_root: modules_root.into(),
        }
    }

    /// Catalog view over the modules root.
    pub fn catalog(&self) -> ModuleCatalog<'_> {
        ModuleCatalog::new(self.filesystem.as_ref(), &self.modules_root)
    }

    /// Create `<root>/<name>/`. Idempotent; an existing module directory
    /// is left untouched.
    #[instrument(skip(self))]
    pub fn create_module(&self, name: &str) -> ArchgenResult<PathBuf> {
        let name = naming::to_snake(name);
        naming::validate_identifier(&name)?;

        let path = self.modules_root.join(&name);
        self.filesystem.create_dir_all(&path)?;

        info!(module = %name, path = %path.display(), "module created");
        Ok(path)
    }

    /// Run one generation request end to end.
    #[instrument(
        skip_all,
        fields(
            service = %config.name(),
            module = %config.module(),
            layer = %config.layer(),
            dtos = config.create_dtos(),
        )
    )]
    pub fn generate(&self, config: &ServiceConfig) -> ArchgenResult<GenerationReport> {
        // 1. Resolve the module path. The shared sentinel short-circuits
        //    to the fixed shared root; other modules were validated
        //    against the catalog by the input-gathering layer.
        let module_path = if config.layer().is_shared() {
            self.modules_root.join(SHARED_MODULE)
        } else {
            self.catalog().module_path(config.module())
        };

        let names = ServiceNames::derive(config.name(), config.layer());

        // 2. DTO pair, when requested.
        let dto_dir = if config.create_dtos() {
            let dir =
                DtoEmitter::new(self.filesystem.as_ref()).emit(&module_path, config.layer(), &names)?;
            info!(dir = %dir.display(), "DTO pair created");
            Some(dir)
        } else {
            None
        };

        // 3. Service file.
        let service_path = ServiceEmitter::new(self.filesystem.as_ref(), self.renderer.as_ref())
            .emit(&module_path, config, &names)?;
        info!(path = %service_path.display(), "service created");

        // 4. Report.
        Ok(GenerationReport {
            dto_dir,
            service_path,
            names,
        })
    }
}
