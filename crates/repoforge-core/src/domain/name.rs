//! Qualified names: the identifiers behind every generated artifact.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity, no I/O.
//! A [`QualifiedName`] is an ordered namespace path plus a simple class
//! name, with two invariants enforced at construction:
//!
//! - the simple name never contains a path or namespace separator
//! - namespace segments never contain the namespace separator
//!
//! Resolution of raw user input into qualified names lives in
//! [`crate::domain::resolver`]. This file's only job is the types, their
//! string representations, and the name → on-disk path mapping.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The namespace separator used in generated artifacts.
pub const NAMESPACE_SEPARATOR: char = '\\';

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// The kind of artifact a name resolves to.
///
/// Each kind has its own default namespace root (see [`NamespaceRoots`]);
/// interface-kind resolution additionally appends an `Interface` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Interface,
    Repository,
    Model,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Repository => "repository",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── NamespaceRoots ────────────────────────────────────────────────────────────

/// The configured root namespace for each artifact kind.
///
/// Defaults follow the conventional layout: `Interfaces`, `Repositories`,
/// `Models`. Values come from the CLI configuration; the resolver treats
/// them as opaque prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceRoots {
    pub interfaces: String,
    pub repositories: String,
    pub models: String,
}

impl NamespaceRoots {
    /// The root namespace for the given artifact kind.
    pub fn root_for(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Interface => &self.interfaces,
            ArtifactKind::Repository => &self.repositories,
            ArtifactKind::Model => &self.models,
        }
    }
}

impl Default for NamespaceRoots {
    fn default() -> Self {
        Self {
            interfaces: "Interfaces".into(),
            repositories: "Repositories".into(),
            models: "Models".into(),
        }
    }
}

// ── QualifiedName ─────────────────────────────────────────────────────────────

/// A fully qualified identifier: namespace path + simple class name.
///
/// Immutable once produced. Display renders the canonical form,
/// e.g. `Interfaces\Billing\InvoiceInterface`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    segments: Vec<String>,
    simple: String,
}

impl QualifiedName {
    /// Parse a `\`-separated qualified name.
    ///
    /// The last segment becomes the simple name; everything before it is the
    /// namespace path. Empty segments (leading, trailing, or doubled
    /// separators) are rejected.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let mut segments: Vec<String> = Vec::new();
        for segment in name.split(NAMESPACE_SEPARATOR) {
            if segment.is_empty() {
                return Err(DomainError::InvalidName {
                    name: name.into(),
                    reason: "empty namespace segment".into(),
                });
            }
            if segment.contains('/') {
                return Err(DomainError::InvalidName {
                    name: name.into(),
                    reason: format!("segment '{segment}' contains a path separator"),
                });
            }
            segments.push(segment.to_string());
        }

        let simple = match segments.pop() {
            Some(simple) => simple,
            None => return Err(DomainError::EmptyName),
        };

        Ok(Self { segments, simple })
    }

    /// The namespace path, joined with the namespace separator.
    ///
    /// Empty when the name has no namespace (a bare class name).
    pub fn namespace(&self) -> String {
        self.segments.join("\\")
    }

    /// The unqualified class name.
    pub fn simple_name(&self) -> &str {
        &self.simple
    }

    /// Lowercase form of the simple name, used as the member-variable name
    /// in generated repositories.
    pub fn variable_name(&self) -> String {
        self.simple.to_lowercase()
    }

    /// Whether the simple name ends with the given suffix.
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.simple.ends_with(suffix)
    }

    /// A copy with the suffix appended to the simple name.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self {
            segments: self.segments.clone(),
            simple: format!("{}{suffix}", self.simple),
        }
    }

    /// Map the name onto a relative file path: one directory per namespace
    /// segment, then `<SimpleName>.<extension>`.
    ///
    /// `Interfaces\Billing\InvoiceInterface` with extension `php` becomes
    /// `Interfaces/Billing/InvoiceInterface.php`.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in &self.segments {
            path.push(segment);
        }
        path.push(format!("{}.{extension}", self.simple));
        path
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}\\")?;
        }
        f.write_str(&self.simple)
    }
}

impl FromStr for QualifiedName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
