//! Application services - orchestrate use cases.

pub mod synthesis_service;

pub use synthesis_service::{ProfileInfo, SynthesisOutcome, SynthesisRequest, SynthesisService};
