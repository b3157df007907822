//! Placement rules: where each generated file lives and how the service
//! imports its DTOs.
//!
//! Two placement schemes exist. Regular layers group DTOs at module
//! level and services per layer:
//!
//! ```text
//! <module>/dtos/<name>/...
//! <module>/services/<layer>/<name>_service.py
//! ```
//!
//! The shared layer keeps everything under one service directory:
//!
//! ```text
//! shared/services/<name>/dtos/...
//! shared/services/<name>/<name>_service.py
//! ```

use std::path::{Path, PathBuf};

use super::layer::LayerKind;

/// Directory holding the DTO pair.
pub fn dto_dir(module_path: &Path, layer: LayerKind, snake: &str) -> PathBuf {
    if layer.is_shared() {
        module_path.join("services").join(snake).join("dtos")
    } else {
        module_path.join("dtos").join(snake)
    }
}

/// Directory holding the service file.
pub fn service_dir(module_path: &Path, layer: LayerKind, snake: &str) -> PathBuf {
    if layer.is_shared() {
        module_path.join("services").join(snake)
    } else {
        module_path.join("services").join(layer.as_str())
    }
}

pub fn request_dto_file(dto_dir: &Path, snake: &str) -> PathBuf {
    dto_dir.join(format!("{snake}_request_dto.py"))
}

pub fn response_dto_file(dto_dir: &Path, snake: &str) -> PathBuf {
    dto_dir.join(format!("{snake}_response_dto.py"))
}

pub fn dto_index_file(dto_dir: &Path) -> PathBuf {
    dto_dir.join("__init__.py")
}

pub fn service_file(service_dir: &Path, snake: &str) -> PathBuf {
    service_dir.join(format!("{snake}_service.py"))
}

/// The import line a generated service uses to reach its DTO pair.
///
/// Import paths are rooted at `src.modules` regardless of where the
/// modules root sits on disk; generated code is addressed from the
/// project root, not from the generator's working directory.
pub fn dto_import(
    module: &str,
    layer: LayerKind,
    snake: &str,
    request_dto: &str,
    response_dto: &str,
) -> String {
    if layer.is_shared() {
        format!(
            "from src.modules.{module}.services.{snake}.dtos import {request_dto}, {response_dto}"
        )
    } else {
        format!("from src.modules.{module}.dtos.{snake} import {request_dto}, {response_dto}")
    }
}
