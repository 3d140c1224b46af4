// ============================================================================
// domain/error.rs - SYNTHESIS ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel through the report types)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid package spec '{spec}'")]
    InvalidPackageSpec { spec: String },

    #[error("Project synthesized no files")]
    EmptyProject,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Conflict Errors (409-level equivalent)
    // ========================================================================
    #[error("Two contributions claim the same output path: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Lookup Errors (404-level equivalent)
    // ========================================================================
    #[error("Unknown project kind: {kind}")]
    UnknownProjectKind { kind: String },

    #[error("Unknown concern: {concern}")]
    UnknownConcern { concern: String },

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Failed to render {path}: {reason}")]
    RenderFailed { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Details: {}", reason),
                "npm names are lowercase, URL-safe and at most 214 characters".into(),
                "Scoped names look like @scope/name".into(),
            ],
            Self::InvalidPackageSpec { spec } => vec![
                format!("Could not parse dependency '{}'", spec),
                "Expected name or name@range, e.g. husky@^9.1.7".into(),
            ],
            Self::UnknownProjectKind { .. } => vec![
                "Available kinds: github-action, service, library".into(),
                "Try: stencil list".into(),
            ],
            Self::UnknownConcern { .. } => vec![
                "Available concerns: npm, typescript, prettier, husky, devcontainer, vscode, github, commitlint, eslint".into(),
                "Try: stencil list --concerns".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("More than one concern generates {}", path),
                "Disable one of the overlapping concerns with --disable".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidPackageSpec { .. }
            | Self::EmptyProject
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } => ErrorCategory::Conflict,
            Self::UnknownProjectKind { .. } | Self::UnknownConcern { .. } => {
                ErrorCategory::NotFound
            }
            Self::RenderFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Result alias used throughout the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_variant_family() {
        assert_eq!(
            DomainError::UnknownProjectKind { kind: "x".into() }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::DuplicatePath { path: "a".into() }.category(),
            ErrorCategory::Conflict
        );
        assert_eq!(DomainError::EmptyProject.category(), ErrorCategory::Validation);
    }

    #[test]
    fn suggestions_mention_the_offending_input() {
        let err = DomainError::InvalidPackageSpec {
            spec: "@".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains('@')));
    }
}
