//! Application layer errors.
//!
//! These errors represent failures in orchestration and filesystem
//! interaction, not business logic. Business-rule violations are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the generation pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The `src/modules` root does not exist.
    #[error("modules root not found at {}", path.display())]
    ModulesRootMissing { path: PathBuf },

    /// The root exists but holds no eligible modules (after excluding
    /// the reserved `shared` bucket).
    #[error("no modules found under {}", path.display())]
    EmptyCatalog { path: PathBuf },

    /// A target DTO pair or service file already exists; nothing was
    /// written.
    #[error("{what} already exists at {}", path.display())]
    DuplicateArtifact { what: &'static str, path: PathBuf },

    /// Exactly one of the DTO pair files pre-exists. Neither overwriting
    /// nor cleanup is safe to assume, so this is surfaced as its own
    /// error instead of being folded into the duplicate case.
    #[error(
        "incomplete DTO pair for '{service}': {} exists but {} does not",
        present.display(),
        missing.display()
    )]
    PartialDtoPair {
        service: String,
        present: PathBuf,
        missing: PathBuf,
    },

    /// Filesystem operation failed.
    #[error("filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("template rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModulesRootMissing { path } => vec![
                format!("Expected a modules root at: {}", path.display()),
                "Run this command from your project root".into(),
                "Create a first module with: archgen module <name>".into(),
            ],
            Self::EmptyCatalog { .. } => vec![
                "Only the reserved 'shared' bucket exists".into(),
                "Create a module first: archgen module <name>".into(),
            ],
            Self::DuplicateArtifact { what, path } => vec![
                format!("A {what} is already present at: {}", path.display()),
                "Pick a different service name, or remove the existing files first".into(),
            ],
            Self::PartialDtoPair {
                present, missing, ..
            } => vec![
                format!("Found:   {}", present.display()),
                format!("Missing: {}", missing.display()),
                "The pair looks half-deleted; inspect it before regenerating".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::RenderingFailed { .. } => {
                vec!["Check the template for unbalanced placeholders".into()]
            }
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModulesRootMissing { .. } | Self::EmptyCatalog { .. } => ErrorCategory::NotFound,
            Self::DuplicateArtifact { .. } | Self::PartialDtoPair { .. } => ErrorCategory::Conflict,
            Self::Filesystem { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_are_not_found() {
        let missing = ApplicationError::ModulesRootMissing {
            path: "src/modules".into(),
        };
        let empty = ApplicationError::EmptyCatalog {
            path: "src/modules".into(),
        };
        assert_eq!(missing.category(), ErrorCategory::NotFound);
        assert_eq!(empty.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn duplicate_and_partial_are_conflicts() {
        let dup = ApplicationError::DuplicateArtifact {
            what: "service",
            path: "x.py".into(),
        };
        let partial = ApplicationError::PartialDtoPair {
            service: "x".into(),
            present: "a".into(),
            missing: "b".into(),
        };
        assert_eq!(dup.category(), ErrorCategory::Conflict);
        assert_eq!(partial.category(), ErrorCategory::Conflict);
    }
}
