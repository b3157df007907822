//! DTO pair emission.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{LayerKind, ServiceNames, layout},
    error::ArchgenResult,
};

/// Writes a request/response DTO stub pair plus the `__init__.py` that
/// re-exports both, establishing the package surface for the pair.
pub struct DtoEmitter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DtoEmitter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Emit the DTO pair for `names` under `module_path`, returning the
    /// DTO directory.
    ///
    /// Both target files are checked before anything is written: if the
    /// pair exists the emission fails with `DuplicateArtifact`, and if
    /// exactly one file exists it fails with `PartialDtoPair`. On any
    /// failure zero files are created.
    pub fn emit(
        &self,
        module_path: &Path,
        layer: LayerKind,
        names: &ServiceNames,
    ) -> ArchgenResult<PathBuf> {
        let dir = layout::dto_dir(module_path, layer, &names.snake);
        let request_file = layout::request_dto_file(&dir, &names.snake);
        let response_file = layout::response_dto_file(&dir, &names.snake);

        match (
            self.filesystem.exists(&request_file),
            self.filesystem.exists(&response_file),
        ) {
            (true, true) => {
                return Err(ApplicationError::DuplicateArtifact {
                    what: "DTO pair",
                    path: dir,
                }
                .into());
            }
            (true, false) => {
                return Err(ApplicationError::PartialDtoPair {
                    service: names.snake.clone(),
                    present: request_file,
                    missing: response_file,
                }
                .into());
            }
            (false, true) => {
                return Err(ApplicationError::PartialDtoPair {
                    service: names.snake.clone(),
                    present: response_file,
                    missing: request_file,
                }
                .into());
            }
            (false, false) => {}
        }

        self.filesystem.create_dir_all(&dir)?;
        self.filesystem
            .write_file(&request_file, &class_stub(&names.request_dto))?;
        self.filesystem
            .write_file(&response_file, &class_stub(&names.response_dto))?;
        self.filesystem
            .write_file(&layout::dto_index_file(&dir), &index_source(names))?;

        debug!(dir = %dir.display(), "DTO pair written");
        Ok(dir)
    }
}

fn class_stub(class: &str) -> String {
    format!("class {class}:\n    pass\n")
}

fn index_source(names: &ServiceNames) -> String {
    format!(
        "from .{snake}_request_dto import {request}\n\
         from .{snake}_response_dto import {response}\n\
         \n\
         __all__ = ['{request}', '{response}']\n",
        snake = names.snake,
        request = names.request_dto,
        response = names.response_dto,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceNames;

    #[test]
    fn class_stub_is_an_empty_python_class() {
        assert_eq!(
            class_stub("InvoiceRequestDto"),
            "class InvoiceRequestDto:\n    pass\n"
        );
    }

    #[test]
    fn index_reexports_both_classes() {
        let names = ServiceNames::derive("invoice", LayerKind::Application);
        let src = index_source(&names);
        assert!(src.contains("from .invoice_request_dto import InvoiceRequestDto"));
        assert!(src.contains("from .invoice_response_dto import InvoiceResponseDto"));
        assert!(src.contains("__all__ = ['InvoiceRequestDto', 'InvoiceResponseDto']"));
    }
}
