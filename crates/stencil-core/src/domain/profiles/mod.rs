//! Composition roots, one per [`ProjectKind`].
//!
//! A profile decides from its [`ProfileOptions`] which builders or config
//! modules exist and in which order, then runs them against a fresh
//! [`Project`].

mod github_action;
mod library;
mod service;

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::domain::{
    config::{ConfigRegistry, ConfigStrategy, modules::NpmConfig},
    entities::ProjectStructure,
    error::DomainResult,
    synthesis::{Project, ProjectMetadata, TrackedContribution},
    value_objects::{ConfigKey, ProjectKind},
};

pub use github_action::GitHubActionProfile;
pub use library::LibraryProfile;
pub use service::ServiceProfile;

/// Switches shared by every profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOptions {
    pub metadata: ProjectMetadata,
    /// When false every config module is `Disabled`. Builders ignore it.
    pub framework_enabled: bool,
    pub disabled: BTreeSet<ConfigKey>,
    /// Concerns handled through the framework's primitives instead of the
    /// standard API. Their modules run as `Shadow`.
    pub tracked: BTreeSet<ConfigKey>,
    pub sample_code: bool,
}

impl ProfileOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ProjectMetadata::new(name),
            framework_enabled: true,
            disabled: BTreeSet::new(),
            tracked: BTreeSet::new(),
            sample_code: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.metadata.license = license.into();
        self
    }

    pub fn repository(mut self, url: impl Into<String>) -> Self {
        self.metadata.repository = Some(url.into());
        self
    }

    pub fn framework_enabled(mut self, enabled: bool) -> Self {
        self.framework_enabled = enabled;
        self
    }

    pub fn disable(mut self, key: ConfigKey) -> Self {
        self.disabled.insert(key);
        self
    }

    pub fn track(mut self, key: ConfigKey) -> Self {
        self.tracked.insert(key);
        self
    }

    pub fn sample_code(mut self, enabled: bool) -> Self {
        self.sample_code = enabled;
        self
    }

    pub fn is_enabled(&self, key: ConfigKey) -> bool {
        !self.disabled.contains(&key)
    }

    /// Strategy a config module for `key` is constructed with.
    pub fn strategy_for(&self, kind: ProjectKind, key: ConfigKey) -> ConfigStrategy {
        if !self.is_enabled(key) {
            return ConfigStrategy::Disabled;
        }
        ConfigStrategy::for_project(
            Some(kind),
            self.framework_enabled,
            !self.tracked.contains(&key),
        )
    }
}

/// How one concern took part in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConcernReport {
    pub concern: ConfigKey,
    pub mode: ConcernMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernMode {
    Builder,
    Skipped,
    Disabled,
    Shadow,
    Active,
}

impl ConcernMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Builder => "builder",
            Self::Skipped => "skipped",
            Self::Disabled => "disabled",
            Self::Shadow => "shadow",
            Self::Active => "active",
        }
    }
}

impl From<ConfigStrategy> for ConcernMode {
    fn from(strategy: ConfigStrategy) -> Self {
        match strategy {
            ConfigStrategy::Disabled => Self::Disabled,
            ConfigStrategy::Shadow => Self::Shadow,
            ConfigStrategy::Active => Self::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisReport {
    pub kind: ProjectKind,
    pub concerns: Vec<ConcernReport>,
    pub tracked: Vec<TrackedContribution>,
}

/// Output of one profile run.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    pub structure: ProjectStructure,
    pub report: SynthesisReport,
}

/// Every supported profile.
#[derive(Debug)]
pub enum ProjectProfile {
    GitHubAction(GitHubActionProfile),
    Service(ServiceProfile),
    Library(LibraryProfile),
}

impl ProjectProfile {
    pub fn new(kind: ProjectKind, options: ProfileOptions) -> Self {
        match kind {
            ProjectKind::GitHubAction => Self::GitHubAction(GitHubActionProfile::new(options)),
            ProjectKind::Service => Self::Service(ServiceProfile::new(options)),
            ProjectKind::Library => Self::Library(LibraryProfile::new(options)),
        }
    }

    pub fn kind(&self) -> ProjectKind {
        match self {
            Self::GitHubAction(_) => ProjectKind::GitHubAction,
            Self::Service(_) => ProjectKind::Service,
            Self::Library(_) => ProjectKind::Library,
        }
    }

    /// Concerns this kind knows about, in the order they run.
    pub fn concerns(kind: ProjectKind) -> &'static [ConfigKey] {
        match kind {
            ProjectKind::GitHubAction => github_action::CONCERNS,
            ProjectKind::Service => service::CONCERNS,
            ProjectKind::Library => library::CONCERNS,
        }
    }

    #[instrument(skip_all, fields(kind = %self.kind()))]
    pub fn synthesize(self, root: impl Into<PathBuf>) -> DomainResult<Synthesis> {
        let synthesis = match self {
            Self::GitHubAction(profile) => profile.synthesize(root),
            Self::Service(profile) => profile.synthesize(root),
            Self::Library(profile) => profile.synthesize(root),
        }?;
        info!(
            files = synthesis.structure.file_count(),
            tracked = synthesis.report.tracked.len(),
            "Profile synthesized"
        );
        Ok(synthesis)
    }
}

/// Shared run of the two registry-based profiles.
///
/// The npm module's remove set is applied to the fresh project first, even
/// when that module is tracked, disabled or the framework is off.
fn synthesize_registry(
    kind: ProjectKind,
    metadata: ProjectMetadata,
    registry: ConfigRegistry,
    root: PathBuf,
) -> DomainResult<Synthesis> {
    let mut project = Project::new(kind, metadata);
    if let Some(npm) = registry.lookup::<NpmConfig>(ConfigKey::Npm) {
        npm.strip_init_scripts(&mut project);
    }
    let applied = registry.register_all().apply_all(&mut project)?;
    let structure = project.synthesize(root)?;

    Ok(Synthesis {
        structure,
        report: SynthesisReport {
            kind,
            concerns: applied
                .outcomes()
                .iter()
                .map(|o| ConcernReport {
                    concern: o.concern,
                    mode: o.strategy.into(),
                })
                .collect(),
            tracked: project.tracked().to_vec(),
        },
    })
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::synthesis::MANIFEST_PATH;

    /// Scripts collected by the npm module once every participating module
    /// has registered.
    pub(super) fn contributed_scripts(registry: ConfigRegistry) -> Vec<(String, String)> {
        registry
            .register_all()
            .lookup::<NpmConfig>(ConfigKey::Npm)
            .map(|npm| {
                npm.scripts()
                    .iter()
                    .map(|(name, command)| (name.clone(), command.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The `scripts` table of the rendered `package.json`.
    pub(super) fn emitted_scripts(structure: &ProjectStructure) -> Map<String, Value> {
        let file = structure.file(MANIFEST_PATH).expect("package.json is rendered");
        let manifest: Value = serde_json::from_str(&file.content).expect("package.json is JSON");
        match manifest.get("scripts") {
            Some(Value::Object(scripts)) => scripts.clone(),
            _ => Map::new(),
        }
    }

    /// Every contributed pair shows up with its exact command.
    pub(super) fn assert_emitted_verbatim(
        contributed: &[(String, String)],
        emitted: &Map<String, Value>,
    ) {
        for (name, command) in contributed {
            assert_eq!(
                emitted.get(name).and_then(Value::as_str),
                Some(command.as_str()),
                "script '{name}'"
            );
        }
    }

    #[test]
    fn disabled_wins_over_tracked() {
        let options = ProfileOptions::new("svc")
            .track(ConfigKey::Husky)
            .disable(ConfigKey::Husky);
        assert_eq!(
            options.strategy_for(ProjectKind::Service, ConfigKey::Husky),
            ConfigStrategy::Disabled
        );
    }

    #[test]
    fn strategies_follow_options() {
        let options = ProfileOptions::new("svc").track(ConfigKey::GitHub);
        assert_eq!(
            options.strategy_for(ProjectKind::Service, ConfigKey::GitHub),
            ConfigStrategy::Shadow
        );
        assert_eq!(
            options.strategy_for(ProjectKind::Library, ConfigKey::Npm),
            ConfigStrategy::Active
        );
        assert_eq!(
            options.strategy_for(ProjectKind::GitHubAction, ConfigKey::Npm),
            ConfigStrategy::Disabled
        );

        let off = ProfileOptions::new("svc").framework_enabled(false);
        assert_eq!(
            off.strategy_for(ProjectKind::Service, ConfigKey::Npm),
            ConfigStrategy::Disabled
        );
    }

    #[test]
    fn each_kind_maps_to_its_profile() {
        for kind in ProjectKind::ALL {
            assert_eq!(ProjectProfile::new(kind, ProfileOptions::new("x")).kind(), kind);
            assert!(!ProjectProfile::concerns(kind).is_empty());
        }
    }
}
