//! Application layer: ports and the services that orchestrate them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    ArtifactWriter, RegistrationStore, ScaffoldPaths, ScaffoldReport, ScaffoldService,
    WriteOutcome,
};
