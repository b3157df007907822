//! Domain-layer errors: invalid requests, never I/O failures.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Business-rule violations detected before any filesystem work starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    /// The shared layer must target the `shared` bucket and vice versa.
    #[error("layer '{layer}' cannot target module '{module}'")]
    LayerModuleMismatch { layer: String, module: String },

    /// Numeric menu selection outside the valid range.
    #[error("selection {index} is out of range (0..{len})")]
    InvalidSelection { index: usize, len: usize },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { reason, .. } => vec![
                format!("Service name problem: {reason}"),
                "Use lowercase words separated by underscores, e.g. user_profile".into(),
            ],
            Self::LayerModuleMismatch { layer, .. } => vec![
                format!("'{layer}' services have a fixed placement"),
                "Shared services always live under src/modules/shared".into(),
                "Pick a module only for domain, application, and infra services".into(),
            ],
            Self::InvalidSelection { len, .. } => {
                vec![format!("Enter a number between 1 and {len}")]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_domain_errors_are_validation() {
        let errors = [
            DomainError::InvalidServiceName {
                name: "x".into(),
                reason: "r".into(),
            },
            DomainError::LayerModuleMismatch {
                layer: "shared".into(),
                module: "billing".into(),
            },
            DomainError::InvalidSelection { index: 9, len: 3 },
        ];
        for err in errors {
            assert_eq!(err.category(), ErrorCategory::Validation);
            assert!(!err.suggestions().is_empty());
        }
    }
}
