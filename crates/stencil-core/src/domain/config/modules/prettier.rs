//! Formatter concern. Collects ignore patterns from every other module.

use std::any::Any;

use indexmap::IndexMap;

use crate::domain::{
    config::{
        ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext, push_unique,
    },
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::{MARKER, prettier},
};

#[derive(Debug, Clone)]
pub struct PrettierConfig {
    strategy: ConfigStrategy,
    ignore_patterns: Vec<String>,
    scripts: IndexMap<String, String>,
}

impl PrettierConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        let (name, command) = prettier::WRITE_SCRIPT;
        Self {
            strategy,
            ignore_patterns: Self::own_patterns(),
            scripts: IndexMap::from([(name.to_string(), command.to_string())]),
        }
    }

    pub fn with_scripts(mut self, scripts: &[(&str, &str)]) -> Self {
        for (name, command) in scripts {
            self.scripts.insert((*name).to_string(), (*command).to_string());
        }
        self
    }

    /// Add root-anchored patterns to `.prettierignore`.
    pub fn add_ignore_patterns<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        push_unique(
            &mut self.ignore_patterns,
            patterns.into_iter().map(|p| anchored(p.as_ref())),
        );
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }

    fn own_patterns() -> Vec<String> {
        [prettier::IGNORE_PATH, prettier::RC_PATH]
            .iter()
            .map(|p| anchored(p))
            .collect()
    }
}

impl ConfigModule for PrettierConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(npm) = registry.npm() {
            npm.add_dev_dependencies(&[prettier::DEV_DEPENDENCY]);
            let scripts: Vec<(&str, &str)> = self
                .scripts
                .iter()
                .map(|(n, c)| (n.as_str(), c.as_str()))
                .collect();
            npm.add_scripts(&scripts);
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut ignore = vec![format!("# ~~ {MARKER}")];
        ignore.extend(self.ignore_patterns.iter().cloned());

        let mut output = ConfigOutput::new();
        output
            .file(GeneratedFile::json(prettier::RC_PATH, prettier::rc())?)
            .file(GeneratedFile::lines(prettier::IGNORE_PATH, ignore)?);
        for pattern in Self::own_patterns() {
            output.generated(&pattern);
        }
        Ok(output)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_patterns_are_anchored_and_unique() {
        let mut prettier = PrettierConfig::new(ConfigStrategy::Active);
        prettier.add_ignore_patterns(["CHANGELOG.md", "/CHANGELOG.md", "/dist"]);

        assert_eq!(
            prettier.ignore_patterns(),
            ["/.prettierignore", "/.prettierrc.json", "/CHANGELOG.md", "/dist"]
        );
    }
}
