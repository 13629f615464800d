//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve the model name, delegating creation if the user opts in
//! 2. Resolve and generate the interface artifact
//! 3. Resolve and generate the repository artifact
//! 4. Register the binding when both artifacts are new
//!
//! Resolved names are held across steps because repository generation
//! references the interface's resolved name and registration needs both.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::application::ports::{ModelGenerator, Prompter};
use crate::application::services::{ArtifactWriter, RegistrationStore, WriteOutcome};
use crate::domain::{ArtifactKind, NameResolver, QualifiedName, StubSet, TemplateContext};
use crate::error::RepoforgeResult;

/// Where generated artifacts land on disk.
#[derive(Debug, Clone)]
pub struct ScaffoldPaths {
    /// Root under which namespace directories (`Interfaces/`, …) are created.
    pub app_root: PathBuf,
    /// Full path of the persisted binding table.
    pub bindings_file: PathBuf,
    /// File extension of generated artifacts, without the dot.
    pub extension: String,
}

impl ScaffoldPaths {
    /// On-disk location of the artifact for a qualified name.
    pub fn artifact_path(&self, name: &QualifiedName) -> PathBuf {
        self.app_root.join(name.relative_path(&self.extension))
    }
}

/// What a scaffold run did, step by step.
///
/// The CLI renders this; the service itself produces no user-facing output.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub interface: QualifiedName,
    pub interface_path: PathBuf,
    pub interface_write: WriteOutcome,
    pub repository: QualifiedName,
    pub repository_path: PathBuf,
    pub repository_write: WriteOutcome,
    pub model: QualifiedName,
    /// Whether model creation was delegated to the external tool.
    pub model_delegated: bool,
    /// Whether the binding table was updated this run.
    pub registered: bool,
}

/// Main scaffolding service.
///
/// Owns the resolver, the stub set, and the driven ports; one instance per
/// command invocation.
pub struct ScaffoldService {
    resolver: NameResolver,
    stubs: StubSet,
    paths: ScaffoldPaths,
    writer: ArtifactWriter,
    store: RegistrationStore,
    prompter: Box<dyn Prompter>,
    model_generator: Box<dyn ModelGenerator>,
}

impl ScaffoldService {
    pub fn new(
        resolver: NameResolver,
        stubs: StubSet,
        paths: ScaffoldPaths,
        writer: ArtifactWriter,
        store: RegistrationStore,
        prompter: Box<dyn Prompter>,
        model_generator: Box<dyn ModelGenerator>,
    ) -> Self {
        Self {
            resolver,
            stubs,
            paths,
            writer,
            store,
            prompter,
            model_generator,
        }
    }

    /// Scaffold the interface, repository, and binding for one resource.
    ///
    /// Re-running with the same name is safe: existing artifacts are
    /// skipped, and the binding table is only touched when both artifacts
    /// were created in this run.
    #[instrument(skip(self))]
    pub fn scaffold(&self, raw_name: &str) -> RepoforgeResult<ScaffoldReport> {
        let raw_name = raw_name.trim();
        if raw_name.is_empty() {
            // Reject before the directory ensure below touches the disk.
            return Err(crate::domain::DomainError::EmptyName.into());
        }

        self.ensure_artifact_directories()?;

        // Model: resolve, and offer delegation when the artifact is absent.
        // A declined prompt is a valid outcome — the resolved name is still
        // used as a reference by the repository stub.
        let model = self.resolver.resolve(raw_name, ArtifactKind::Model)?;
        let model_delegated = self.allocate_model(raw_name, &model)?;

        // Interface: the resolved name is retained even when the write is
        // skipped, since reusing an existing interface is valid.
        let interface = self.resolver.resolve(raw_name, ArtifactKind::Interface)?;
        let interface_path = self.paths.artifact_path(&interface);
        info!(path = %interface_path.display(), "interface target");
        let interface_write = self.writer.write_if_absent(
            &interface_path,
            &self
                .stubs
                .interface
                .render(&TemplateContext::for_interface(&interface)),
        )?;

        // Repository: references the interface resolved above and the model
        // resolved earlier.
        let repository = self.resolver.resolve(raw_name, ArtifactKind::Repository)?;
        let repository_path = self.paths.artifact_path(&repository);
        let repository_write = self.writer.write_if_absent(
            &repository_path,
            &self.stubs.repository.render(&TemplateContext::for_repository(
                &repository,
                &interface,
                &model,
            )),
        )?;

        // Registration only on genuinely new interface + repository pairs;
        // a re-run must leave the persisted table untouched.
        let registered = interface_write.was_written() && repository_write.was_written();
        if registered {
            self.store
                .merge_and_persist(&self.paths.bindings_file, &interface, &repository)?;
        } else {
            debug!("artifacts already existed, binding table untouched");
        }

        Ok(ScaffoldReport {
            interface,
            interface_path,
            interface_write,
            repository,
            repository_path,
            repository_write,
            model,
            model_delegated,
            registered,
        })
    }

    /// Idempotent creation of the interface- and repository-kind target
    /// directories.
    fn ensure_artifact_directories(&self) -> RepoforgeResult<()> {
        let roots = self.resolver.roots();
        for kind in [ArtifactKind::Interface, ArtifactKind::Repository] {
            let dir = self.paths.app_root.join(roots.root_for(kind));
            self.writer.ensure_directory(&dir)?;
        }
        Ok(())
    }

    /// Offer to delegate model creation when no artifact exists at the
    /// model's resolved path. Returns whether delegation happened.
    fn allocate_model(&self, raw_name: &str, model: &QualifiedName) -> RepoforgeResult<bool> {
        let model_path = self.paths.artifact_path(model);
        if self.writer.exists(&model_path) {
            debug!(path = %model_path.display(), "model artifact present");
            return Ok(false);
        }

        let question = format!("Model {model} does not exist. Create it now?");
        if !self.prompter.confirm(&question)? {
            debug!("model creation declined, continuing without model artifact");
            return Ok(false);
        }

        self.model_generator.generate(raw_name)?;
        info!(model = %model, "model creation delegated");
        Ok(true)
    }
}
