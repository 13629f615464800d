//! Application services.

pub mod artifact_writer;
pub mod registration_store;
pub mod scaffold_service;

pub use artifact_writer::{ArtifactWriter, WriteOutcome};
pub use registration_store::RegistrationStore;
pub use scaffold_service::{ScaffoldPaths, ScaffoldReport, ScaffoldService};
