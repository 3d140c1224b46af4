use super::DomainError;
use std::fmt;
use std::path::{Component, Path};

/// A generated-file path, always relative to the project root and always
/// written with forward slashes.
///
/// Invariant: never absolute, never empty, never escapes the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = path.as_ref();
        let absolute = || DomainError::AbsolutePathNotAllowed {
            path: raw.to_string(),
        };

        if raw.starts_with('/') || Path::new(raw).is_absolute() {
            return Err(absolute());
        }
        let escapes = Path::new(raw)
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir));
        if raw.is_empty() || escapes {
            return Err(absolute());
        }

        Ok(Self(raw.trim_start_matches("./").to_string()))
    }

    /// Build from a gitattributes/ignore pattern such as `/.husky/commit-msg`.
    pub fn from_pattern(pattern: &str) -> Result<Self, DomainError> {
        Self::try_new(pattern.trim_start_matches('/'))
    }

    /// Root-anchored pattern used in `.gitattributes` and ignore files.
    pub fn pattern(&self) -> String {
        format!("/{}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root-anchor a path or pattern: `CHANGELOG.md` becomes `/CHANGELOG.md`.
pub fn anchored(pattern: &str) -> String {
    if pattern.starts_with('/') {
        pattern.to_string()
    } else {
        format!("/{pattern}")
    }
}

/// Capability-based permissions model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    readable: bool,
    writable: bool,
    executable: bool,
}

impl Permissions {
    pub const fn read_write() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: false,
        }
    }

    /// Git hooks need this.
    pub const fn executable() -> Self {
        Self {
            readable: true,
            writable: true,
            executable: true,
        }
    }

    pub const fn readable(&self) -> bool {
        self.readable
    }
    pub const fn writable(&self) -> bool {
        self.writable
    }
    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_rejects_escapes() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
        assert!(RelativePath::try_new("../outside").is_err());
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    fn relative_path_produces_anchored_pattern() {
        let path = RelativePath::try_new(".husky/commit-msg").unwrap();
        assert_eq!(path.pattern(), "/.husky/commit-msg");
        assert_eq!(RelativePath::from_pattern("/.husky/commit-msg").unwrap(), path);
    }

    #[test]
    fn anchored_is_idempotent() {
        assert_eq!(anchored("CHANGELOG.md"), "/CHANGELOG.md");
        assert_eq!(anchored("/CHANGELOG.md"), "/CHANGELOG.md");
    }
}
