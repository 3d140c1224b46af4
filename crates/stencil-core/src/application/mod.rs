//! Application layer for Stencil.
//!
//! - **Services**: use case orchestration ([`SynthesisService`])
//! - **Ports**: traits for the outside world ([`Filesystem`])
//! - **Errors**: application-specific error types
//!
//! All generation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ProfileInfo, SynthesisOutcome, SynthesisRequest, SynthesisService};

pub use ports::Filesystem;

pub use error::ApplicationError;
