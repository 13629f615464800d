//! Domain layer: pure scaffolding logic with no I/O.
//!
//! Everything here is a function of its inputs — qualified-name resolution,
//! stub rendering, and binding-table manipulation all happen on plain values.
//! The application layer owns the side effects.

pub mod bindings;
pub mod error;
pub mod name;
pub mod resolver;
pub mod template;

pub use bindings::RegistrationTable;
pub use error::{DomainError, ErrorCategory};
pub use name::{ArtifactKind, NamespaceRoots, QualifiedName};
pub use resolver::NameResolver;
pub use template::{StubSet, StubTemplate, TemplateContext, placeholders};
