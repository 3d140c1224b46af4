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
    templates::{commitlint, github::GitHubFile},
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

/// Framework tasks a service never runs.
pub const REMOVE_SCRIPTS: [&str; 14] = [
    "clobber",
    "compile",
    "default",
    "eject",
    "package",
    "post-compile",
    "post-upgrade",
    "pre-compile",
    "release",
    "unbump",
    "upgrade",
    "watch",
    "projen",
    "bump",
];

const SCRIPTS: [(&str, &str); 8] = [
    ("start", "cds-serve --production"),
    ("start:local", "cds-ts serve"),
    ("build", "run-s build:models build:cds build:ts"),
    ("build:models", "cds-typer '*' --outputDirectory @cds-models"),
    ("build:cds", "cds build --production"),
    ("build:ts", "tsc"),
    ("test", "jest --passWithNoTests --updateSnapshot"),
    ("test:watch", "jest --watch"),
];

const DEPENDENCIES: [&str; 3] = [
    "@dxfrontier/cds-ts-dispatcher@^3.2.7",
    "@sap/cds@^8.6.1",
    "@sap/xssec@^4.2.8",
];

const DEV_DEPENDENCIES: [&str; 9] = [
    "npm-run-all@^4.1.5",
    "@cap-js/cds-typer@^0.32.0",
    "@cap-js/cds-types@^0.9.0",
    "@sap/cds-dk@^8.6.1",
    "@sap/cds-lsp@^8.5.1",
    "jest@^29.7.0",
    "ts-jest@^29.2.5",
    "@types/jest@^29.5.14",
    "jest-junit@^16.0.0",
];

const GENERATED_DIRS: [&str; 3] = ["@cds-models", "dist", "gen"];

/// Registry-based profile for CAP backend services.
#[derive(Debug)]
pub struct ServiceProfile {
    options: ProfileOptions,
    registry: ConfigRegistry,
}

impl ServiceProfile {
    pub fn new(options: ProfileOptions) -> Self {
        let strategy = |key| options.strategy_for(ProjectKind::Service, key);
        let mut registry = ConfigRegistry::new();

        registry.register(
            ConfigKey::Npm,
            NpmConfig::new(strategy(ConfigKey::Npm))
                .with_removed_scripts(&REMOVE_SCRIPTS)
                .with_dependencies(&DEPENDENCIES)
                .with_dev_dependencies(&DEV_DEPENDENCIES)
                .with_scripts(&SCRIPTS)
                .with_settings(object(json!({
                    "files": ["gen", "README.md"],
                    "imports": {
                        "#cds-models/*": "./@cds-models/*/index.js",
                        "#dispatcher": "./@dispatcher/index.js"
                    }
                })))
                .with_generated_dirs(&GENERATED_DIRS)
                .with_lint_ignores(&["docs/"]),
        );
        registry.register(
            ConfigKey::TypeScript,
            TypeScriptConfig::new(strategy(ConfigKey::TypeScript)),
        );
        registry.register(
            ConfigKey::Prettier,
            PrettierConfig::new(strategy(ConfigKey::Prettier))
                .with_scripts(&[("prettier:cds", "format-cds")]),
        );
        registry.register(ConfigKey::Husky, HuskyConfig::new(strategy(ConfigKey::Husky)));
        registry.register(
            ConfigKey::DevContainer,
            DevContainerConfig::new(strategy(ConfigKey::DevContainer)),
        );
        registry.register(ConfigKey::VsCode, VsCodeConfig::new(strategy(ConfigKey::VsCode)));
        registry.register(
            ConfigKey::GitHub,
            GitHubConfig::new(strategy(ConfigKey::GitHub))
                .with_file(GitHubFile::PullRequestExtended)
                .with_file(GitHubFile::StoryFeatureIssue)
                .with_file(GitHubFile::StoryIssue),
        );
        registry.register(
            ConfigKey::CommitLint,
            CommitLintConfig::new(strategy(ConfigKey::CommitLint)),
        );
        registry.register(
            ConfigKey::CommitLint,
            CommitLintConfig::new(strategy(ConfigKey::CommitLint))
                .with_lint_staged(commitlint::service_lint_staged()),
        );
        registry.register(ConfigKey::EsLint, EsLintConfig::new(strategy(ConfigKey::EsLint)));

        Self { options, registry }
    }

    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    pub(super) fn synthesize(self, root: impl Into<PathBuf>) -> DomainResult<Synthesis> {
        synthesize_registry(
            ProjectKind::Service,
            self.options.metadata,
            self.registry,
            root.into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        profiles::tests::{assert_emitted_verbatim, contributed_scripts, emitted_scripts},
        templates::{devcontainer, eslint, husky, prettier},
    };

    fn contributions(options: &ProfileOptions) -> Vec<(String, String)> {
        contributed_scripts(ServiceProfile::new(options.clone()).registry)
    }

    #[test]
    fn every_contributed_script_is_emitted_verbatim() {
        let options = ProfileOptions::new("svc");
        let contributed = contributions(&options);

        let expected = SCRIPTS.iter().copied().chain([
            prettier::WRITE_SCRIPT,
            ("prettier:cds", "format-cds"),
            husky::PREPARE_SCRIPT,
            devcontainer::INSTALL_SCRIPT,
            commitlint::COMMIT_SCRIPT,
            eslint::SCRIPT,
        ]);
        for (name, command) in expected {
            assert!(
                contributed.contains(&(name.to_string(), command.to_string())),
                "'{name}' was not contributed"
            );
        }

        let synthesis = ServiceProfile::new(options).synthesize("out").unwrap();
        assert_emitted_verbatim(&contributed, &emitted_scripts(&synthesis.structure));
    }

    #[test]
    fn disabled_concern_contributes_no_script() {
        let options = ProfileOptions::new("svc").disable(ConfigKey::Husky);
        let contributed = contributions(&options);
        assert!(!contributed.iter().any(|(name, _)| name == "prepare"));

        let synthesis = ServiceProfile::new(options).synthesize("out").unwrap();
        let emitted = emitted_scripts(&synthesis.structure);
        assert!(!emitted.contains_key("prepare"));
        assert_emitted_verbatim(&contributed, &emitted);
    }

    #[test]
    fn remove_set_holds_for_every_npm_strategy() {
        let variants = [
            ProfileOptions::new("svc"),
            ProfileOptions::new("svc").track(ConfigKey::Npm),
            ProfileOptions::new("svc").disable(ConfigKey::Npm),
            ProfileOptions::new("svc").framework_enabled(false),
        ];

        for options in variants {
            let label = format!(
                "tracked={:?} disabled={:?} framework={}",
                options.tracked, options.disabled, options.framework_enabled
            );
            let synthesis = ServiceProfile::new(options).synthesize("out").unwrap();
            let emitted = emitted_scripts(&synthesis.structure);

            for removed in REMOVE_SCRIPTS {
                assert!(!emitted.contains_key(removed), "'{removed}' kept with {label}");
            }
        }
    }

    #[test]
    fn framework_off_keeps_only_surviving_scaffold_tasks() {
        let options = ProfileOptions::new("svc").framework_enabled(false);
        let synthesis = ServiceProfile::new(options).synthesize("out").unwrap();
        let emitted = emitted_scripts(&synthesis.structure);

        let names: Vec<&str> = emitted.keys().map(String::as_str).collect();
        assert_eq!(names, ["build", "eslint", "test", "test:watch"]);
        assert_eq!(emitted["build"], "npx projen build");
    }
}
