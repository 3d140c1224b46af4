//! Commit message linting plus the lint-staged table run by the pre-commit
//! hook.

use std::any::Any;

use serde_json::{Map, Value};

use crate::domain::{
    config::{ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext},
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::commitlint,
};

#[derive(Debug, Clone)]
pub struct CommitLintConfig {
    strategy: ConfigStrategy,
    lint_staged: Map<String, Value>,
}

impl CommitLintConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        Self {
            strategy,
            lint_staged: commitlint::base_lint_staged(),
        }
    }

    /// Replace the lint-staged table as a whole. Entries of the base table
    /// are not kept.
    pub fn with_lint_staged(mut self, lint_staged: Map<String, Value>) -> Self {
        self.lint_staged = lint_staged;
        self
    }

    pub fn lint_staged(&self) -> &Map<String, Value> {
        &self.lint_staged
    }
}

impl ConfigModule for CommitLintConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(npm) = registry.npm() {
            npm.add_dev_dependencies(&commitlint::DEV_DEPENDENCIES);
            npm.add_scripts(&[commitlint::COMMIT_SCRIPT]);

            let mut settings = Map::new();
            settings.insert(
                commitlint::LINT_STAGED_FIELD.to_string(),
                Value::Object(self.lint_staged.clone()),
            );
            npm.add_settings(settings);
        }
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns([commitlint::CONFIG_PATH]);
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut output = ConfigOutput::new();
        output
            .file(GeneratedFile::lines(
                commitlint::CONFIG_PATH,
                commitlint::config_lines(),
            )?)
            .generated(&anchored(commitlint::CONFIG_PATH));
        Ok(output)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
