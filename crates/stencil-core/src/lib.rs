//! Stencil Core
//!
//! Domain and application layers for the Stencil project generator, laid
//! out as ports and adapters.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (SynthesisService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Filesystem)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stencil-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Profiles, ConfigRegistry, Builders)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_core::prelude::*;
//! # fn run(filesystem: Box<dyn Filesystem>) -> StencilResult<()> {
//! let service = SynthesisService::new(filesystem);
//! let request = SynthesisRequest::new(ProjectKind::Service, "my-service", "./out");
//! let outcome = service.synthesize(&request)?;
//! println!("wrote {} files", outcome.structure.file_count());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        ProfileInfo, SynthesisOutcome, SynthesisRequest, SynthesisService, ports::Filesystem,
    };
    pub use crate::domain::{
        ConfigKey, ConfigStrategy, Permissions, ProfileOptions, ProjectKind, ProjectProfile,
        ProjectStructure,
    };
    pub use crate::error::{StencilError, StencilResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
