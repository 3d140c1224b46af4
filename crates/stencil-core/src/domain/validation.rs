use crate::domain::{entities::ProjectStructure, error::DomainError};

const MAX_NAME_LEN: usize = 214;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate a project name against npm package naming rules.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name must be at most 214 characters"));
        }
        if name.trim() != name {
            return Err(invalid("name must not have leading or trailing whitespace"));
        }
        if name.starts_with('.') || name.starts_with('_') {
            return Err(invalid("name must not start with '.' or '_'"));
        }
        if name.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(invalid("name must be lowercase"));
        }

        let bare = match name.strip_prefix('@') {
            Some(scoped) => match scoped.split_once('/') {
                Some((scope, pkg)) if !scope.is_empty() && !pkg.is_empty() => {
                    Self::check_segment(scope).map_err(|r| invalid(&r))?;
                    pkg
                }
                _ => return Err(invalid("scoped names look like @scope/name")),
            },
            None => name,
        };

        Self::check_segment(bare).map_err(|r| invalid(&r))
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }

    fn check_segment(segment: &str) -> Result<(), String> {
        match segment
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')))
        {
            Some(c) => Err(format!("character '{c}' is not URL-safe")),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_scoped_names() {
        assert!(DomainValidator::validate_project_name("my-action").is_ok());
        assert!(DomainValidator::validate_project_name("@dxfrontier/cds-service").is_ok());
        assert!(DomainValidator::validate_project_name("lib.v2").is_ok());
    }

    #[test]
    fn rejects_names_npm_would_refuse() {
        for name in ["", "My-App", ".hidden", "_private", "with space", "@scope", "@/x", "a/b"] {
            assert!(
                DomainValidator::validate_project_name(name).is_err(),
                "{name:?} should be rejected"
            );
        }
        assert!(DomainValidator::validate_project_name(&"a".repeat(215)).is_err());
    }
}
