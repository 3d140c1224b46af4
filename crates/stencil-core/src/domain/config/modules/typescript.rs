use std::any::Any;

use serde_json::{Map, Value};

use crate::domain::{
    config::{ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext},
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::typescript,
};

const INCLUDE: [&str; 2] = ["src/**/*.ts", "test/**/*.ts"];

/// Compiler config concern.
#[derive(Debug, Clone)]
pub struct TypeScriptConfig {
    strategy: ConfigStrategy,
    path: String,
    compiler_options: Map<String, Value>,
}

impl TypeScriptConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        Self {
            strategy,
            path: typescript::CONFIG_PATH.to_string(),
            compiler_options: typescript::compiler_options(),
        }
    }

    /// Write to `path` instead of `tsconfig.json`.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }
}

impl ConfigModule for TypeScriptConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(npm) = registry.npm() {
            npm.add_dev_dependencies(&typescript::DEV_DEPENDENCIES);
        }
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns([self.path.as_str()]);
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let include: Vec<String> = INCLUDE.iter().map(|p| (*p).to_string()).collect();
        let mut output = ConfigOutput::new();
        output
            .file(GeneratedFile::json(
                &self.path,
                typescript::tsconfig(&self.compiler_options, &include),
            )?)
            .generated(&anchored(&self.path));
        Ok(output)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
