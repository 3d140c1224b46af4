use std::any::Any;

use serde_json::{Map, Value};

use crate::domain::{
    config::{ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext},
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::vscode,
};

/// Editor settings concern.
#[derive(Debug, Clone)]
pub struct VsCodeConfig {
    strategy: ConfigStrategy,
    settings: Map<String, Value>,
}

impl VsCodeConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        let settings = match vscode::settings() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { strategy, settings }
    }
}

impl ConfigModule for VsCodeConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns([vscode::SETTINGS_PATH]);
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut output = ConfigOutput::new();
        output
            .file(GeneratedFile::json(
                vscode::SETTINGS_PATH,
                Value::Object(self.settings.clone()),
            )?)
            .generated(&anchored(vscode::SETTINGS_PATH));
        Ok(output)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
