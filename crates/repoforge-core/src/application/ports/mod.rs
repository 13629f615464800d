//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `repoforge-adapters` crate provides the production implementations;
//! the CLI crate provides the interactive prompter.

use crate::error::RepoforgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `repoforge_adapters::filesystem::LocalFilesystem` (production)
/// - `repoforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Reads exist because the binding table is read-then-fully-rewritten;
///   artifact generation itself only probes existence and writes.
/// - No locking: concurrent invocations against the same table are
///   last-writer-wins, which is accepted for a one-shot developer tool.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> RepoforgeResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> RepoforgeResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RepoforgeResult<()>;
}

/// Port for the single interactive confirmation the tool asks.
///
/// Implemented by the CLI crate (dialoguer-backed, or a fixed answer for
/// `--yes` / `--no-interaction`).
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask a yes/no question. A `false` answer is a valid outcome, not an
    /// error.
    fn confirm(&self, question: &str) -> RepoforgeResult<bool>;
}

/// Port for the external model-generation tool.
///
/// Implemented by:
/// - `repoforge_adapters::model_generator::CommandModelGenerator` (production)
/// - `repoforge_adapters::model_generator::RecordingModelGenerator` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ModelGenerator: Send + Sync {
    /// Generate the model artifact for the raw resource name.
    ///
    /// No output is consumed beyond success/failure; the artifact is
    /// assumed to exist afterwards.
    fn generate(&self, name: &str) -> RepoforgeResult<()>;
}
