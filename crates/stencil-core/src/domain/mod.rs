//! Core domain layer for Stencil.
//!
//! Pure synthesis logic: no filesystem, no network. The result of a run is a
//! [`ProjectStructure`] that the application layer hands to a `Filesystem`
//! port.
//!
//! ## Layout
//!
//! - [`synthesis`]: the in-memory [`Project`] engine (manifest, files,
//!   `.gitattributes`, ignore lists).
//! - [`config`]: registry-composed config modules and their strategies.
//! - [`builders`]: registry-free builders with a fixed pipeline.
//! - [`profiles`]: one composition root per [`ProjectKind`].
//! - [`templates`]: static file payloads.

pub mod builders;
pub mod config;
pub mod entities;
pub mod error;
pub mod profiles;
pub mod synthesis;
pub mod templates;
pub mod value_objects;

mod validation;

pub use config::{
    AppliedConfigs, ConfigModule, ConfigOutput, ConfigRegistry, ConfigStrategy,
    RegisteredConfigs,
};
pub use entities::{FileToWrite, Permissions, ProjectStructure, RelativePath};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use profiles::{
    ConcernMode, ConcernReport, ProfileOptions, ProjectProfile, Synthesis, SynthesisReport,
};
pub use synthesis::{
    DependencyKind, GeneratedFile, PackageManifest, Project, ProjectMetadata,
    TrackedContribution,
};
pub use validation::DomainValidator;
pub use value_objects::{ConfigKey, PackageSpec, ProjectKind};
