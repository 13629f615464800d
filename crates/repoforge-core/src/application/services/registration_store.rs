//! Load, merge, and persist the interface → repository binding table.
//!
//! Unlike artifact writes, persistence here always overwrites the table
//! file in full: the configuration must reflect the latest merge every
//! run. The on-disk artifact is the source of truth; the in-memory table
//! is a transient view loaded fresh on each call.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::application::ports::Filesystem;
use crate::domain::{QualifiedName, RegistrationTable, StubTemplate, TemplateContext};
use crate::error::RepoforgeResult;

/// Persists interface → repository bindings through the [`Filesystem`] port.
pub struct RegistrationStore {
    filesystem: Box<dyn Filesystem>,
    stub: StubTemplate,
}

impl RegistrationStore {
    pub fn new(filesystem: Box<dyn Filesystem>, stub: StubTemplate) -> Self {
        Self { filesystem, stub }
    }

    /// Load the persisted table, or an empty one if the file is absent.
    ///
    /// Malformed content is a parse failure — the store never guesses its
    /// way past a table it cannot read, since the next persist would
    /// silently drop the unreadable entries.
    pub fn load(&self, table_path: &Path) -> RepoforgeResult<RegistrationTable> {
        if !self.filesystem.exists(table_path) {
            debug!(path = %table_path.display(), "no binding table yet, starting empty");
            return Ok(RegistrationTable::new());
        }
        let content = self.filesystem.read_file(table_path)?;
        Ok(RegistrationTable::parse(&content)?)
    }

    /// Merge one binding into the persisted table and rewrite it in full.
    #[instrument(skip(self), fields(table = %table_path.display()))]
    pub fn merge_and_persist(
        &self,
        table_path: &Path,
        interface: &QualifiedName,
        repository: &QualifiedName,
    ) -> RepoforgeResult<()> {
        let mut table = self.load(table_path)?;
        table.merge(interface.to_string(), repository.to_string());

        let body = self
            .stub
            .render(&TemplateContext::for_bindings(table.render_lines()));

        if let Some(parent) = table_path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(table_path, &body)?;

        info!(
            interface = %interface,
            repository = %repository,
            entries = table.len(),
            "binding registered"
        );
        Ok(())
    }
}
