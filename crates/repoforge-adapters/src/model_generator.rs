//! Model-generation adapters.
//!
//! Model artifacts are produced by an external tool (`php artisan
//! make:model` by convention). The adapter only reports success or
//! failure; the generated artifact is assumed to exist afterwards.

use std::process::Command;
use std::sync::{Arc, Mutex};

use tracing::{debug, instrument};

use repoforge_core::{
    application::{ApplicationError, ports::ModelGenerator},
    error::RepoforgeResult,
};

/// Runs the configured external command with the resource name appended.
pub struct CommandModelGenerator {
    program: String,
    args: Vec<String>,
}

impl CommandModelGenerator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl ModelGenerator for CommandModelGenerator {
    #[instrument(skip(self), fields(program = %self.program))]
    fn generate(&self, name: &str) -> RepoforgeResult<()> {
        debug!(args = ?self.args, "invoking external model tool");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(name)
            .status()
            .map_err(|e| ApplicationError::ModelGeneration {
                name: name.to_string(),
                reason: format!("could not run '{}': {e}", self.program),
            })?;

        if !status.success() {
            return Err(ApplicationError::ModelGeneration {
                name: name.to_string(),
                reason: format!("'{}' exited with {status}", self.program),
            }
            .into());
        }

        Ok(())
    }
}

/// Records generated names instead of running anything (testing helper).
#[derive(Debug, Clone, Default)]
pub struct RecordingModelGenerator {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingModelGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names `generate` was called with, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ModelGenerator for RecordingModelGenerator {
    fn generate(&self, name: &str) -> RepoforgeResult<()> {
        self.calls.lock().unwrap().push(name.to_string());
        Ok(())
    }
}
