//! Application layer errors.
//!
//! These represent failures of the outside world reached through ports —
//! filesystem, prompt, external model tool. Business-rule violations are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("filesystem error at {}: {}", .path.display(), .reason)]
    Filesystem { path: PathBuf, reason: String },

    /// The external model-generation tool failed to run or exited nonzero.
    #[error("model generation failed for '{name}': {reason}")]
    ModelGeneration { name: String, reason: String },

    /// The confirmation prompt could not be read.
    #[error("prompt failed: {reason}")]
    Prompt { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the application root exists".into(),
            ],
            Self::ModelGeneration { name, .. } => vec![
                format!("The external model tool could not create '{name}'"),
                "Check that the configured model command is installed and on PATH".into(),
                "Re-run without model creation and add the model by hand".into(),
            ],
            Self::Prompt { .. } => vec![
                "Interactive input was unavailable".into(),
                "Use --yes or --no-interaction in non-interactive environments".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Io,
            Self::ModelGeneration { .. } | Self::Prompt { .. } => ErrorCategory::External,
        }
    }
}
