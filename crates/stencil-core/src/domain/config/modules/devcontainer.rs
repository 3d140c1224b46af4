use std::any::Any;

use crate::domain::{
    config::{ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext},
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::devcontainer,
};

/// `.devcontainer.json` concern.
#[derive(Debug, Clone)]
pub struct DevContainerConfig {
    strategy: ConfigStrategy,
    features: Vec<String>,
    extensions: Vec<String>,
}

impl DevContainerConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        let mut extensions: Vec<String> = devcontainer::EXTENSIONS
            .iter()
            .map(|e| (*e).to_string())
            .collect();
        extensions.push(devcontainer::COPILOT_EXTENSION.to_string());

        Self {
            strategy,
            features: devcontainer::BASE_FEATURES
                .iter()
                .map(|f| (*f).to_string())
                .collect(),
            extensions,
        }
    }
}

impl ConfigModule for DevContainerConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(npm) = registry.npm() {
            npm.add_scripts(&[devcontainer::INSTALL_SCRIPT]);
        }
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns([devcontainer::PATH]);
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut output = ConfigOutput::new();
        output
            .file(GeneratedFile::json(
                devcontainer::PATH,
                devcontainer::descriptor(&self.features, &self.extensions),
            )?)
            .generated(&anchored(devcontainer::PATH));
        Ok(output)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
