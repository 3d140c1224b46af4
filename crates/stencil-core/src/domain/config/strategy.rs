//! Per-concern involvement level.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    config::ConfigOutput,
    error::DomainResult,
    synthesis::Project,
    value_objects::{ConfigKey, ProjectKind},
};

/// How much a config module does during apply.
///
/// Chosen once when the module is constructed and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigStrategy {
    /// The framework's own handling covers the concern. Nothing happens.
    Disabled,
    /// Record what would be written and tag generated paths, but let the
    /// framework's low-level primitives do the writing.
    Shadow,
    /// Write files and manifest changes.
    Active,
}

impl ConfigStrategy {
    /// The dispatch table.
    ///
    /// | framework active | standard API | strategy |
    /// |------------------|--------------|----------|
    /// | false            | any          | Disabled |
    /// | true             | true         | Active   |
    /// | true             | false        | Shadow   |
    pub const fn select(framework_active: bool, using_standard_api: bool) -> Self {
        match (framework_active, using_standard_api) {
            (false, _) => Self::Disabled,
            (true, true) => Self::Active,
            (true, false) => Self::Shadow,
        }
    }

    /// Select for a module built for `kind`. Kinds that do not compose
    /// through the registry, and an unknown kind, always get `Disabled`.
    pub const fn for_project(
        kind: Option<ProjectKind>,
        framework_active: bool,
        using_standard_api: bool,
    ) -> Self {
        match kind {
            Some(kind) if kind.uses_config_registry() => {
                Self::select(framework_active, using_standard_api)
            }
            _ => Self::Disabled,
        }
    }

    /// Whether a module bound to this strategy takes part in registration.
    pub const fn participates(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Shadow => "shadow",
            Self::Active => "active",
        }
    }

    /// Hand a module's output to the engine according to this strategy.
    pub fn apply(
        self,
        concern: ConfigKey,
        output: ConfigOutput,
        project: &mut Project,
    ) -> DomainResult<()> {
        let ConfigOutput {
            files,
            manifest,
            generated,
        } = output;

        match self {
            Self::Disabled => {
                debug!(concern = %concern, "Concern disabled, output dropped");
                Ok(())
            }
            Self::Shadow => {
                debug!(concern = %concern, files = files.len(), "Tracking concern output");
                project.track(concern, files, &manifest, &generated);
                Ok(())
            }
            Self::Active => {
                debug!(concern = %concern, files = files.len(), "Applying concern output");
                project.materialize(files, &manifest, &generated)
            }
        }
    }
}

impl fmt::Display for ConfigStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
