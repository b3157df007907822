//! Name normalization and class-name derivation.
//!
//! All generated identifiers flow through here exactly once, so a
//! service named `user_profile` always yields the same four class names
//! no matter which command produced it.

use serde::Serialize;

use super::{error::DomainError, layer::LayerKind};

/// Normalize user input to the canonical snake form.
///
/// Only lowercasing happens here; anything structurally wrong (hyphens,
/// spaces, leading digits) is rejected by [`validate_identifier`] rather
/// than silently repaired.
pub fn to_snake(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Convert a snake_case identifier to PascalCase.
pub fn to_pascal(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Validate a normalized identifier: non-empty, ASCII letters, digits
/// and underscores only, not starting with a digit.
pub fn validate_identifier(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidServiceName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidServiceName {
            name: name.into(),
            reason: "name cannot start with a digit".into(),
        });
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
    {
        return Err(DomainError::InvalidServiceName {
            name: name.into(),
            reason: format!("invalid character '{bad}'"),
        });
    }
    Ok(())
}

/// The complete naming set derived from one service name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceNames {
    /// Normalized snake_case name, used in file and directory names.
    pub snake: String,
    /// `<Pascal>RequestDto`
    pub request_dto: String,
    /// `<Pascal>ResponseDto`
    pub response_dto: String,
    /// `<Pascal>Service`
    pub service_class: String,
    /// Python base class, empty for the shared layer.
    pub base_class: &'static str,
}

impl ServiceNames {
    /// Derive every generated identifier from a service name and layer.
    pub fn derive(name: &str, layer: LayerKind) -> Self {
        let snake = to_snake(name);
        let pascal = to_pascal(&snake);
        Self {
            request_dto: format!("{pascal}RequestDto"),
            response_dto: format!("{pascal}ResponseDto"),
            service_class: format!("{pascal}Service"),
            base_class: layer.base_class(),
            snake,
        }
    }

    /// The class name without its `Service` suffix; templates append the
    /// suffix themselves.
    pub fn service_base(&self) -> &str {
        self.service_class
            .strip_suffix("Service")
            .unwrap_or(&self.service_class)
    }
}
