//! Per-project registry of config modules.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::domain::{
    config::{
        ApplyPhase, ConfigModule, ConfigStrategy,
        modules::{EsLintConfig, NpmConfig, PrettierConfig},
    },
    error::DomainResult,
    synthesis::Project,
    value_objects::ConfigKey,
};

// A slot is empty only while its own module is running `register_config`.
type Slot = Option<Box<dyn ConfigModule>>;

/// Modules of one project, keyed by concern.
///
/// Registering a key twice replaces the earlier module in place. There is no
/// removal. Iteration follows first-registration order, so synthesis output
/// never depends on hashing.
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    modules: IndexMap<ConfigKey, Slot>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `module` under `key`. Returns `true` when an earlier module was
    /// replaced.
    pub fn register<M: ConfigModule>(&mut self, key: ConfigKey, module: M) -> bool {
        let replaced = self.modules.insert(key, Some(Box::new(module))).is_some();
        if replaced {
            warn!(concern = %key, "Config module registered twice, keeping the later one");
        } else {
            debug!(concern = %key, "Registered config module");
        }
        replaced
    }

    /// The module under `key` as `T`. `None` means the concern is not part
    /// of this project, or is registered with a different type.
    pub fn lookup<T: ConfigModule>(&self, key: ConfigKey) -> Option<&T> {
        self.modules
            .get(&key)?
            .as_deref()?
            .as_any()
            .downcast_ref::<T>()
    }

    pub fn contains(&self, key: ConfigKey) -> bool {
        self.modules.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = ConfigKey> + '_ {
        self.modules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Run the registration phase for every participating module, in
    /// registration order.
    #[instrument(skip_all, fields(modules = self.modules.len()))]
    pub fn register_all(mut self) -> RegisteredConfigs {
        let keys: Vec<ConfigKey> = self.modules.keys().copied().collect();

        for key in keys {
            let Some(mut module) = self.modules.get_mut(&key).and_then(Option::take) else {
                continue;
            };

            if module.strategy().participates() {
                let mut context = RegistrationContext {
                    modules: &mut self.modules,
                };
                module.register_config(&mut context);
                debug!(concern = %key, strategy = %module.strategy(), "Registered contributions");
            } else {
                debug!(concern = %key, "Skipping registration of disabled concern");
            }

            if let Some(slot) = self.modules.get_mut(&key) {
                *slot = Some(module);
            }
        }

        RegisteredConfigs {
            modules: self
                .modules
                .into_iter()
                .filter_map(|(key, slot)| slot.map(|module| (key, module)))
                .collect(),
        }
    }
}

/// Collaborator access handed to a module while it registers.
///
/// The registering module itself is not reachable through its own key.
pub struct RegistrationContext<'a> {
    modules: &'a mut IndexMap<ConfigKey, Slot>,
}

impl RegistrationContext<'_> {
    pub fn lookup_mut<T: ConfigModule>(&mut self, key: ConfigKey) -> Option<&mut T> {
        self.modules
            .get_mut(&key)?
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut::<T>()
    }

    pub fn npm(&mut self) -> Option<&mut NpmConfig> {
        self.lookup_mut(ConfigKey::Npm)
    }

    pub fn prettier(&mut self) -> Option<&mut PrettierConfig> {
        self.lookup_mut(ConfigKey::Prettier)
    }

    pub fn eslint(&mut self) -> Option<&mut EsLintConfig> {
        self.lookup_mut(ConfigKey::EsLint)
    }
}

/// Every module has registered. Accumulators are now read-only.
#[derive(Debug)]
pub struct RegisteredConfigs {
    modules: Vec<(ConfigKey, Box<dyn ConfigModule>)>,
}

impl RegisteredConfigs {
    pub fn lookup<T: ConfigModule>(&self, key: ConfigKey) -> Option<&T> {
        self.modules
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, module)| module.as_any().downcast_ref::<T>())
    }

    /// Apply each module through its strategy.
    #[instrument(skip_all, fields(modules = self.modules.len()))]
    pub fn apply_all(self, project: &mut Project) -> DomainResult<AppliedConfigs> {
        let phase = ApplyPhase::new();
        let mut outcomes = Vec::with_capacity(self.modules.len());

        for (key, module) in &self.modules {
            let strategy = module.strategy();
            let output = module.apply_config(&phase)?;
            strategy.apply(*key, output, project)?;
            outcomes.push(ConfigOutcome {
                concern: *key,
                strategy,
            });
        }

        Ok(AppliedConfigs { outcomes })
    }
}

/// How one concern was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigOutcome {
    pub concern: ConfigKey,
    pub strategy: ConfigStrategy,
}

/// Terminal state: every module has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedConfigs {
    outcomes: Vec<ConfigOutcome>,
}

impl AppliedConfigs {
    pub fn outcomes(&self) -> &[ConfigOutcome] {
        &self.outcomes
    }

    pub fn strategy_of(&self, key: ConfigKey) -> Option<ConfigStrategy> {
        self.outcomes
            .iter()
            .find(|o| o.concern == key)
            .map(|o| o.strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        config::modules::{CommitLintConfig, GitHubConfig},
        synthesis::ProjectMetadata,
        templates::commitlint,
        value_objects::ProjectKind,
    };
    use serde_json::json;

    fn project() -> Project {
        Project::new(ProjectKind::Service, ProjectMetadata::new("svc"))
    }

    #[test]
    fn lookup_of_missing_concern_is_none() {
        let registry = ConfigRegistry::new();
        assert!(registry.lookup::<NpmConfig>(ConfigKey::Npm).is_none());
    }

    #[test]
    fn lookup_with_wrong_type_is_none() {
        let mut registry = ConfigRegistry::new();
        registry.register(ConfigKey::Npm, NpmConfig::new(ConfigStrategy::Active));
        assert!(registry.lookup::<PrettierConfig>(ConfigKey::Npm).is_none());
        assert!(registry.lookup::<NpmConfig>(ConfigKey::Npm).is_some());
    }

    #[test]
    fn duplicate_key_overrides_in_place() {
        let mut registry = ConfigRegistry::new();
        registry.register(ConfigKey::Npm, NpmConfig::new(ConfigStrategy::Active));
        assert!(!registry.register(
            ConfigKey::CommitLint,
            CommitLintConfig::new(ConfigStrategy::Active)
        ));
        registry.register(ConfigKey::GitHub, GitHubConfig::new(ConfigStrategy::Active));

        let replaced = registry.register(
            ConfigKey::CommitLint,
            CommitLintConfig::new(ConfigStrategy::Active)
                .with_lint_staged(commitlint::service_lint_staged()),
        );

        assert!(replaced);
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            vec![ConfigKey::Npm, ConfigKey::CommitLint, ConfigKey::GitHub]
        );
        let commitlint = registry
            .lookup::<CommitLintConfig>(ConfigKey::CommitLint)
            .unwrap();
        assert!(commitlint.lint_staged().contains_key("**/*.{ts,tsx}"));
    }

    #[test]
    fn registration_reaches_collaborators_registered_later() {
        let mut registry = ConfigRegistry::new();
        registry.register(
            ConfigKey::CommitLint,
            CommitLintConfig::new(ConfigStrategy::Active),
        );
        registry.register(ConfigKey::Npm, NpmConfig::new(ConfigStrategy::Active));

        let registered = registry.register_all();
        let npm = registered.lookup::<NpmConfig>(ConfigKey::Npm).unwrap();

        assert_eq!(npm.scripts().get("commit").map(String::as_str), Some("commit"));
        assert_eq!(
            npm.settings().get("lint-staged"),
            Some(&json!({ "**/*.{yml,yaml}": ["npm run format:message", "npm run format:fix"] }))
        );
    }

    #[test]
    fn disabled_modules_do_not_register() {
        let mut registry = ConfigRegistry::new();
        registry.register(
            ConfigKey::CommitLint,
            CommitLintConfig::new(ConfigStrategy::Disabled),
        );
        registry.register(ConfigKey::Npm, NpmConfig::new(ConfigStrategy::Active));

        let registered = registry.register_all();
        let npm = registered.lookup::<NpmConfig>(ConfigKey::Npm).unwrap();
        assert!(!npm.scripts().contains_key("commit"));
    }

    #[test]
    fn apply_all_reports_each_strategy() {
        let mut registry = ConfigRegistry::new();
        registry.register(ConfigKey::Npm, NpmConfig::new(ConfigStrategy::Active));
        registry.register(ConfigKey::GitHub, GitHubConfig::new(ConfigStrategy::Shadow));

        let mut project = project();
        let applied = registry.register_all().apply_all(&mut project).unwrap();

        assert_eq!(applied.strategy_of(ConfigKey::Npm), Some(ConfigStrategy::Active));
        assert_eq!(applied.strategy_of(ConfigKey::GitHub), Some(ConfigStrategy::Shadow));
        assert_eq!(applied.strategy_of(ConfigKey::Husky), None);
        assert!(project.file("cliff.toml").is_none());
        assert_eq!(project.tracked()[0].concern, ConfigKey::GitHub);
    }

    #[test]
    fn registries_are_independent() {
        let mut first = ConfigRegistry::new();
        first.register(ConfigKey::Npm, NpmConfig::new(ConfigStrategy::Active));
        let second = ConfigRegistry::new();

        assert!(first.contains(ConfigKey::Npm));
        assert!(!second.contains(ConfigKey::Npm));
        assert!(second.is_empty());
    }
}
