//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented in
//!   `stencil-adapters`
//!   - `Filesystem`: file operations

pub mod output;

pub use output::Filesystem;
