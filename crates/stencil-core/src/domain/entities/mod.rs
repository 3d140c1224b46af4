pub mod common;
pub mod project_structure;

pub use crate::domain::DomainError;
pub use common::{Permissions, RelativePath, anchored};
pub use project_structure::{FileToWrite, ProjectStructure};
