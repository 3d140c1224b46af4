use std::path::PathBuf;

use serde_json::json;

use crate::domain::{
    config::{
        ConfigRegistry,
        modules::{
            CommitLintConfig, DevContainerConfig, EsLintConfig, GitHubConfig, HuskyConfig,
            NpmConfig, PrettierConfig, TypeScriptConfig, VsCodeConfig,
        },
    },
    error::DomainResult,
    templates::{eslint, typescript},
    value_objects::{ConfigKey, ProjectKind},
};

use super::{ProfileOptions, Synthesis, object, synthesize_registry};

pub(super) const CONCERNS: &[ConfigKey] = &[
    ConfigKey::Npm,
    ConfigKey::TypeScript,
    ConfigKey::Prettier,
    ConfigKey::Husky,
    ConfigKey::DevContainer,
    ConfigKey::VsCode,
    ConfigKey::GitHub,
    ConfigKey::CommitLint,
    ConfigKey::EsLint,
];

/// Registry-based profile for jsii libraries.
#[derive(Debug)]
pub struct LibraryProfile {
    options: ProfileOptions,
    registry: ConfigRegistry,
}

impl LibraryProfile {
    pub fn new(options: ProfileOptions) -> Self {
        let strategy = |key| options.strategy_for(ProjectKind::Library, key);
        let mut registry = ConfigRegistry::new();

        registry.register(
            ConfigKey::Npm,
            NpmConfig::new(strategy(ConfigKey::Npm))
                .with_settings(object(json!({ "files": ["lib", ".jsii", "README.md"] }))),
        );
        registry.register(
            ConfigKey::TypeScript,
            TypeScriptConfig::new(strategy(ConfigKey::TypeScript))
                .with_path(typescript::DEV_CONFIG_PATH),
        );
        registry.register(
            ConfigKey::Prettier,
            PrettierConfig::new(strategy(ConfigKey::Prettier)),
        );
        registry.register(ConfigKey::Husky, HuskyConfig::new(strategy(ConfigKey::Husky)));
        registry.register(
            ConfigKey::DevContainer,
            DevContainerConfig::new(strategy(ConfigKey::DevContainer)),
        );
        registry.register(ConfigKey::VsCode, VsCodeConfig::new(strategy(ConfigKey::VsCode)));
        registry.register(ConfigKey::GitHub, GitHubConfig::new(strategy(ConfigKey::GitHub)));
        registry.register(
            ConfigKey::CommitLint,
            CommitLintConfig::new(strategy(ConfigKey::CommitLint)),
        );
        registry.register(
            ConfigKey::EsLint,
            EsLintConfig::new(strategy(ConfigKey::EsLint))
                .with_rules(&eslint::LIBRARY_RULES)
                .with_ignores(&eslint::LIBRARY_IGNORES),
        );

        Self { options, registry }
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    pub(super) fn synthesize(self, root: impl Into<PathBuf>) -> DomainResult<Synthesis> {
        synthesize_registry(
            ProjectKind::Library,
            self.options.metadata,
            self.registry,
            root.into(),
        )
    }
}
