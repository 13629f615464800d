//! Create-if-missing artifact persistence.
//!
//! Generated files must never clobber user edits: a file that already
//! exists at the target path is left untouched and the write is reported
//! as [`WriteOutcome::Skipped`]. This is what makes repeated invocations
//! of the tool safe.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::error::RepoforgeResult;

/// The result of a create-if-missing write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Written,
    /// A file already existed at the path; nothing was touched.
    Skipped,
}

impl WriteOutcome {
    pub const fn was_written(self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Writes rendered artifacts through the [`Filesystem`] port.
pub struct ArtifactWriter {
    filesystem: Box<dyn Filesystem>,
}

impl ArtifactWriter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Whether an artifact already exists at `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(path)
    }

    /// Idempotent directory ensure.
    pub fn ensure_directory(&self, path: &Path) -> RepoforgeResult<()> {
        self.filesystem.create_dir_all(path)
    }

    /// Write `contents` to `path` unless a file is already there.
    ///
    /// Parent directories are created first. Filesystem failures propagate
    /// unchanged; an existing file is [`WriteOutcome::Skipped`], never an
    /// error.
    pub fn write_if_absent(&self, path: &Path, contents: &str) -> RepoforgeResult<WriteOutcome> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "artifact exists, skipping write");
            return Ok(WriteOutcome::Skipped);
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, contents)?;
        debug!(path = %path.display(), "artifact written");
        Ok(WriteOutcome::Written)
    }
}
