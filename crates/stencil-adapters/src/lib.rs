//! Infrastructure adapters for Stencil.
//!
//! Implements the ports defined in `stencil_core::application::ports`. All
//! I/O lives here.

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
