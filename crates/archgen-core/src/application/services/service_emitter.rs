//! Service file emission.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{RenderContext, ServiceConfig, ServiceNames, layout},
    error::ArchgenResult,
};

/// Renders the layer template and writes the service source file.
pub struct ServiceEmitter<'a> {
    filesystem: &'a dyn Filesystem,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> ServiceEmitter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, renderer: &'a dyn TemplateRenderer) -> Self {
        Self {
            filesystem,
            renderer,
        }
    }

    /// Emit the service file for `config` under `module_path`, returning
    /// its final path.
    ///
    /// Fails with `DuplicateArtifact` before writing if the target file
    /// already exists. When the config asked for DTOs, exactly one
    /// import line referencing the DTO package is prepended to the
    /// rendered body.
    pub fn emit(
        &self,
        module_path: &Path,
        config: &ServiceConfig,
        names: &ServiceNames,
    ) -> ArchgenResult<PathBuf> {
        let dir = layout::service_dir(module_path, config.layer(), &names.snake);
        let file = layout::service_file(&dir, &names.snake);

        if self.filesystem.exists(&file) {
            return Err(ApplicationError::DuplicateArtifact {
                what: "service",
                path: file,
            }
            .into());
        }

        let context = if config.create_dtos() {
            RenderContext::new(
                names.service_base(),
                Some(&names.request_dto),
                Some(&names.response_dto),
            )
        } else {
            RenderContext::new(names.service_base(), None, None)
        };

        let mut source = self.renderer.render(config.layer(), &context)?;

        if config.create_dtos() {
            let import = layout::dto_import(
                config.module(),
                config.layer(),
                &names.snake,
                &names.request_dto,
                &names.response_dto,
            );
            source = format!("{import}\n\n{source}");
        }

        self.filesystem.create_dir_all(&dir)?;
        self.filesystem.write_file(&file, &source)?;

        debug!(file = %file.display(), "service written");
        Ok(file)
    }
}
