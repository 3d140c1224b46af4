//! Domain value objects: ProjectKind, ConfigKey, PackageSpec.
//!
//! # Design
//!
//! These are pure value types, equality-by-value, no identity. This file's
//! only job is to define the types, their string representations, and their
//! `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The kind of project to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    /// A GitHub composite action. Built with builders, no registry.
    #[serde(rename = "github-action")]
    GitHubAction,
    /// An enterprise backend service built on CAP.
    Service,
    /// A jsii-packaged library.
    Library,
}

impl ProjectKind {
    pub const ALL: [Self; 3] = [Self::GitHubAction, Self::Service, Self::Library];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GitHubAction => "github-action",
            Self::Service => "service",
            Self::Library => "library",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::GitHubAction => "GitHub Action",
            Self::Service => "Service",
            Self::Library => "Library",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::GitHubAction => "Composite GitHub Action with release tooling",
            Self::Service => "CAP backend service with TypeScript dispatchers",
            Self::Library => "jsii library packaged for several languages",
        }
    }

    /// Whether this kind composes config modules through the registry.
    ///
    /// Builder-based kinds never bind a config strategy, so anything other
    /// than these resolves to `ConfigStrategy::Disabled`.
    pub const fn uses_config_registry(self) -> bool {
        matches!(self, Self::Service | Self::Library)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github-action" | "action" | "gha" => Ok(Self::GitHubAction),
            "service" | "cap-service" | "cap" => Ok(Self::Service),
            "library" | "lib" | "jsii" => Ok(Self::Library),
            other => Err(DomainError::UnknownProjectKind {
                kind: other.to_string(),
            }),
        }
    }
}

// ── ConfigKey ─────────────────────────────────────────────────────────────────

/// Symbolic key of one configuration concern.
///
/// Registry slots are addressed by this key. Declaration order is the order
/// used when a profile lists its concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKey {
    Npm,
    TypeScript,
    Prettier,
    Husky,
    DevContainer,
    VsCode,
    GitHub,
    CommitLint,
    EsLint,
}

impl ConfigKey {
    pub const ALL: [Self; 9] = [
        Self::Npm,
        Self::TypeScript,
        Self::Prettier,
        Self::Husky,
        Self::DevContainer,
        Self::VsCode,
        Self::GitHub,
        Self::CommitLint,
        Self::EsLint,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::TypeScript => "typescript",
            Self::Prettier => "prettier",
            Self::Husky => "husky",
            Self::DevContainer => "devcontainer",
            Self::VsCode => "vscode",
            Self::GitHub => "github",
            Self::CommitLint => "commitlint",
            Self::EsLint => "eslint",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "prettier" => Ok(Self::Prettier),
            "husky" => Ok(Self::Husky),
            "devcontainer" | "dev-container" => Ok(Self::DevContainer),
            "vscode" | "vs-code" => Ok(Self::VsCode),
            "github" => Ok(Self::GitHub),
            "commitlint" | "commit-lint" => Ok(Self::CommitLint),
            "eslint" => Ok(Self::EsLint),
            other => Err(DomainError::UnknownConcern {
                concern: other.to_string(),
            }),
        }
    }
}

// ── PackageSpec ───────────────────────────────────────────────────────────────

/// An npm dependency as written in projen-style lists: `name` or `name@range`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageSpec {
    name: String,
    range: Option<String>,
}

impl PackageSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }

    /// Range written to the manifest when none was given.
    pub fn range_or_any(&self) -> &str {
        self.range.as_deref().unwrap_or("*")
    }
}

impl FromStr for PackageSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPackageSpec { spec: s.to_string() };
        let spec = s.trim();

        // A leading '@' belongs to the scope, so only look for a separator after it.
        let (name, range) = match spec.get(1..).and_then(|rest| rest.rfind('@')) {
            Some(idx) => {
                let (name, range) = spec.split_at(idx + 1);
                (name, Some(&range[1..]))
            }
            None => (spec, None),
        };

        if name.is_empty() || name == "@" || name.ends_with('/') {
            return Err(invalid());
        }
        if name.starts_with('@') && !name.contains('/') {
            return Err(invalid());
        }
        if matches!(range, Some(r) if r.is_empty()) {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_string(),
            range: range.map(str::to_string),
        })
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            Some(range) => write!(f, "{}@{}", self.name, range),
            None => f.write_str(&self.name),
        }
    }
}
