//! Git hooks concern.

use std::any::Any;

use crate::domain::{
    config::{ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext},
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::husky,
};

#[derive(Debug, Clone)]
pub struct HuskyConfig {
    strategy: ConfigStrategy,
}

impl HuskyConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        Self { strategy }
    }

    fn patterns() -> Vec<String> {
        husky::HOOKS.iter().map(|(path, _)| anchored(path)).collect()
    }
}

impl ConfigModule for HuskyConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(npm) = registry.npm() {
            npm.add_dev_dependencies(&[husky::DEV_DEPENDENCY]);
            npm.add_scripts(&[husky::PREPARE_SCRIPT]);
        }
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns(Self::patterns());
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut output = ConfigOutput::new();
        for (path, command) in husky::HOOKS {
            output.file(GeneratedFile::lines(path, husky::hook_lines(command, false))?.executable());
        }
        for pattern in Self::patterns() {
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
