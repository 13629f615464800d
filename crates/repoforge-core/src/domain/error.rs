//! Domain-level errors: invalid input and malformed persisted state.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (values only, no live handles)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The user-supplied resource name was empty (or whitespace only).
    #[error("resource name is empty")]
    EmptyName,

    /// A qualified name violated a structural invariant.
    #[error("invalid qualified name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Namespace qualification failed to reach a fixed point.
    ///
    /// Reachable only with a namespace root that cannot survive its own
    /// prefix check (e.g. one ending in a separator).
    #[error("could not qualify '{name}' under namespace root '{root}'")]
    QualificationDiverged { name: String, root: String },

    /// The persisted binding table could not be parsed.
    #[error("malformed binding table at line {line}: '{content}'")]
    MalformedBindings { line: usize, content: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide a resource name, e.g.: repoforge make Order".into(),
                "Nested namespaces use '/': repoforge make Billing/Invoice".into(),
            ],
            Self::InvalidName { name, reason } => vec![
                format!("'{name}' is not a valid qualified name: {reason}"),
                "Use namespace segments separated by '/' or '\\'".into(),
            ],
            Self::QualificationDiverged { root, .. } => vec![
                format!("The configured namespace root '{root}' is invalid"),
                "Check the [namespaces] section of your configuration".into(),
            ],
            Self::MalformedBindings { line, .. } => vec![
                format!("The binding table could not be parsed (line {line})"),
                "Fix the offending line, or delete the file to start from an empty table".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::MalformedBindings { .. } => ErrorCategory::Parse,
            Self::QualificationDiverged { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Parse,
    Internal,
}
