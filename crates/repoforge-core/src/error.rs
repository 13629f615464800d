//! Unified error handling for Repoforge Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Repoforge Core operations.
///
/// Wraps all failures that can occur when using repoforge-core, providing
/// one surface for the CLI boundary to log, categorize, and display.
#[derive(Debug, Error, Clone)]
pub enum RepoforgeError {
    /// Errors from the domain layer (invalid input, malformed state).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, external collaborators).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl RepoforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Parse => ErrorCategory::Parse,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid user input.
    Validation,
    /// Persisted state could not be parsed.
    Parse,
    /// Filesystem failure.
    Io,
    /// An external collaborator (model generator, prompt) failed.
    External,
    /// Unexpected internal failure.
    Internal,
}

/// Convenient result type alias.
pub type RepoforgeResult<T> = Result<T, RepoforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_maps_to_validation_category() {
        let err: RepoforgeError = DomainError::EmptyName.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_filesystem_maps_to_io_category() {
        let err: RepoforgeError = ApplicationError::Filesystem {
            path: "/tmp/x".into(),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn suggestions_pass_through_from_inner_error() {
        let err: RepoforgeError = DomainError::EmptyName.into();
        assert!(!err.suggestions().is_empty());
    }
}
