//! Repoforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Repoforge
//! repository-scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          repoforge-cli (CLI)            │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, RegistrationStore)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, Prompter, ModelGenerator) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   repoforge-adapters (Infrastructure)   │
//! │  (LocalFilesystem, CommandModelGen, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (QualifiedName, StubTemplate, Bindings) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use repoforge_core::{
//!     application::{ScaffoldService, ScaffoldPaths},
//!     domain::{NameResolver, NamespaceRoots},
//! };
//!
//! let resolver = NameResolver::new(NamespaceRoots::default());
//! // Assemble the service with injected adapters, then:
//! // service.scaffold("Order")?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactWriter, RegistrationStore, ScaffoldPaths, ScaffoldReport, ScaffoldService,
        WriteOutcome,
        ports::{Filesystem, ModelGenerator, Prompter},
    };
    pub use crate::domain::{
        ArtifactKind, NameResolver, NamespaceRoots, QualifiedName, RegistrationTable, StubSet,
        StubTemplate, TemplateContext,
    };
    pub use crate::error::{RepoforgeError, RepoforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
