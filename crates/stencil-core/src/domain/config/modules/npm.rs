//! Package manifest concern.

use std::any::Any;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{
    config::{
        ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext, push_unique,
    },
    entities::anchored,
    error::DomainResult,
    synthesis::{DependencyKind, Project},
};

/// Framework tasks stripped from every registry-based project unless the
/// profile supplies its own list. Stripping happens at project init and
/// does not depend on the module's strategy.
pub const REMOVE_ON_INIT: [&str; 16] = [
    "clobber",
    "compile",
    "default",
    "eject",
    "package",
    "post-compile",
    "post-upgrade",
    "pre-compile",
    "release",
    "test",
    "test:watch",
    "unbump",
    "upgrade",
    "watch",
    "projen",
    "build",
];

const GENERATED: [&str; 2] = ["/package.json", "/package-lock.json"];

/// Owns dependencies, scripts and top-level settings of `package.json`.
///
/// Other modules contribute through the `add_*` methods while registering.
#[derive(Debug, Clone)]
pub struct NpmConfig {
    strategy: ConfigStrategy,
    dependencies: Vec<String>,
    dev_dependencies: Vec<String>,
    settings: IndexMap<String, Value>,
    scripts: IndexMap<String, String>,
    remove_scripts: Vec<String>,
    generated_dirs: Vec<String>,
    lint_ignores: Vec<String>,
}

impl NpmConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        Self {
            strategy,
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            settings: IndexMap::new(),
            scripts: IndexMap::new(),
            remove_scripts: REMOVE_ON_INIT.iter().map(|s| (*s).to_string()).collect(),
            generated_dirs: Vec::new(),
            lint_ignores: Vec::new(),
        }
    }

    // ── construction ─────────────────────────────────────────────────────────

    pub fn with_dependencies(mut self, specs: &[&str]) -> Self {
        self.add_dependencies(specs);
        self
    }

    pub fn with_dev_dependencies(mut self, specs: &[&str]) -> Self {
        self.add_dev_dependencies(specs);
        self
    }

    pub fn with_settings(mut self, settings: Map<String, Value>) -> Self {
        self.add_settings(settings);
        self
    }

    pub fn with_scripts(mut self, scripts: &[(&str, &str)]) -> Self {
        self.add_scripts(scripts);
        self
    }

    /// Replace the default remove-on-init set.
    pub fn with_removed_scripts(mut self, names: &[&str]) -> Self {
        self.remove_scripts = names.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Build output directories that are generated and must not be formatted.
    pub fn with_generated_dirs(mut self, dirs: &[&str]) -> Self {
        push_unique(&mut self.generated_dirs, dirs.iter().copied());
        self
    }

    /// Paths the linter should skip.
    pub fn with_lint_ignores(mut self, patterns: &[&str]) -> Self {
        push_unique(&mut self.lint_ignores, patterns.iter().copied());
        self
    }

    // ── collaborator API ─────────────────────────────────────────────────────

    pub fn add_dependencies(&mut self, specs: &[&str]) {
        push_unique(&mut self.dependencies, specs.iter().copied());
    }

    pub fn add_dev_dependencies(&mut self, specs: &[&str]) {
        push_unique(&mut self.dev_dependencies, specs.iter().copied());
    }

    /// Shallow merge: each top-level key replaces any earlier value.
    pub fn add_settings(&mut self, settings: Map<String, Value>) {
        for (key, value) in settings {
            self.settings.insert(key, value);
        }
    }

    pub fn add_scripts(&mut self, scripts: &[(&str, &str)]) {
        for (name, command) in scripts {
            self.scripts.insert((*name).to_string(), (*command).to_string());
        }
    }

    // ── accessors ────────────────────────────────────────────────────────────

    pub fn scripts(&self) -> &IndexMap<String, String> {
        &self.scripts
    }

    pub fn settings(&self) -> &IndexMap<String, Value> {
        &self.settings
    }

    pub fn dev_dependencies(&self) -> &[String] {
        &self.dev_dependencies
    }

    pub fn removed_scripts(&self) -> &[String] {
        &self.remove_scripts
    }

    /// Drop the framework tasks in the remove set from `project`. Runs before
    /// any module registers, whatever this module's strategy is, so a removed
    /// name cannot come back through a later contribution.
    pub fn strip_init_scripts(&self, project: &mut Project) {
        let manifest = project.manifest_mut();
        for name in &self.remove_scripts {
            manifest.remove_script(name);
        }
        debug!(
            removed = self.remove_scripts.len(),
            strategy = %self.strategy,
            "Stripped framework tasks"
        );
    }

    fn generated_patterns(&self) -> Vec<String> {
        GENERATED
            .iter()
            .map(|p| (*p).to_string())
            .chain(self.generated_dirs.iter().map(|d| anchored(d)))
            .collect()
    }
}

impl ConfigModule for NpmConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns(self.generated_patterns());
        }
        if let Some(eslint) = registry.eslint() {
            eslint.add_ignores(self.lint_ignores.iter().map(String::as_str));
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut output = ConfigOutput::new();
        output
            .dependencies(DependencyKind::Runtime, &self.dependencies)
            .dependencies(DependencyKind::Dev, &self.dev_dependencies)
            .scripts(&self.scripts);
        for (key, value) in &self.settings {
            output.field(key, value.clone());
        }
        for pattern in self.generated_patterns() {
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
