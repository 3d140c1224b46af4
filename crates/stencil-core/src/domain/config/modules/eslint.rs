use std::any::Any;

use indexmap::IndexMap;

use crate::domain::{
    config::{
        ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext, push_unique,
    },
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::eslint,
};

/// Linter concern. Collects ignore paths from the package module.
#[derive(Debug, Clone)]
pub struct EsLintConfig {
    strategy: ConfigStrategy,
    rules: IndexMap<String, String>,
    ignores: Vec<String>,
}

impl EsLintConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        Self {
            strategy,
            rules: eslint::BASE_RULES
                .iter()
                .map(|(rule, setting)| ((*rule).to_string(), (*setting).to_string()))
                .collect(),
            ignores: Vec::new(),
        }
    }

    pub fn with_rules(mut self, rules: &[(&str, &str)]) -> Self {
        for (rule, setting) in rules {
            self.rules.insert((*rule).to_string(), (*setting).to_string());
        }
        self
    }

    pub fn with_ignores(mut self, ignores: &[&str]) -> Self {
        self.add_ignores(ignores.iter().copied());
        self
    }

    pub fn add_ignores<'a>(&mut self, ignores: impl IntoIterator<Item = &'a str>) {
        push_unique(&mut self.ignores, ignores);
    }

    pub fn rules(&self) -> &IndexMap<String, String> {
        &self.rules
    }

    pub fn ignores(&self) -> &[String] {
        &self.ignores
    }
}

impl ConfigModule for EsLintConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(npm) = registry.npm() {
            npm.add_dev_dependencies(&eslint::DEV_DEPENDENCIES);
            npm.add_scripts(&[eslint::SCRIPT]);
        }
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns([eslint::CONFIG_PATH]);
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut output = ConfigOutput::new();
        output
            .file(GeneratedFile::lines(
                eslint::CONFIG_PATH,
                eslint::config_lines(&self.rules, &self.ignores),
            )?)
            .generated(&anchored(eslint::CONFIG_PATH));
        Ok(output)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
