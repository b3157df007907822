//! Unified error handling for archgen-core.
//!
//! This module provides a single error type that wraps domain and
//! application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for archgen-core operations.
#[derive(Debug, Error, Clone)]
pub enum ArchgenError {
    /// Errors from the domain layer (invalid requests).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ArchgenError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad operator input.
    Validation,
    /// A required resource (modules root, module) is absent.
    NotFound,
    /// Target files already exist or are inconsistent.
    Conflict,
    /// Filesystem or rendering failure.
    Internal,
}

/// Convenient result type alias.
pub type ArchgenResult<T> = Result<T, ArchgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_category() {
        let err: ArchgenError = DomainError::InvalidSelection { index: 5, len: 2 }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);

        let err: ArchgenError = ApplicationError::EmptyCatalog {
            path: "src/modules".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn display_passes_through_inner_message() {
        let err: ArchgenError = ApplicationError::RenderingFailed {
            reason: "boom".into(),
        }
        .into();
        assert!(err.to_string().contains("boom"));
    }
}
