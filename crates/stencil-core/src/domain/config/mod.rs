//! Registry-composed config modules.
//!
//! Each concern (npm, prettier, husky, ...) is one [`ConfigModule`]. Modules
//! find each other through a [`ConfigRegistry`] and go through two phases:
//!
//! 1. **register**: push contributions into collaborators via their public
//!    `add_*` methods.
//! 2. **apply**: produce a [`ConfigOutput`] from the now-final accumulators;
//!    the module's [`ConfigStrategy`] decides what reaches the project.
//!
//! The phases are separate types ([`ConfigRegistry`] ->
//! [`RegisteredConfigs`] -> [`AppliedConfigs`]) and `apply_config` needs an
//! [`ApplyPhase`] token only the registered state can mint.

pub mod modules;
pub mod registry;
pub mod strategy;

use std::any::Any;
use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::{
    error::DomainResult,
    synthesis::{DependencyKind, GeneratedFile, ManifestPatch},
};

pub use registry::{
    AppliedConfigs, ConfigOutcome, ConfigRegistry, RegisteredConfigs, RegistrationContext,
};
pub use strategy::ConfigStrategy;

/// Proof that every module has finished registering.
///
/// Only [`RegisteredConfigs::apply_all`] creates one.
#[derive(Debug)]
pub struct ApplyPhase {
    _sealed: (),
}

impl ApplyPhase {
    pub(in crate::domain::config) const fn new() -> Self {
        Self { _sealed: () }
    }
}

/// One configuration concern.
pub trait ConfigModule: Any + fmt::Debug {
    /// Strategy bound at construction.
    fn strategy(&self) -> ConfigStrategy;

    /// Push contributions into collaborators. Runs once, before any module
    /// applies. Collaborators that are not registered are skipped.
    fn register_config(&mut self, registry: &mut RegistrationContext<'_>);

    /// Render this module's files and manifest changes from its final state.
    fn apply_config(&self, phase: &ApplyPhase) -> DomainResult<ConfigOutput>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Everything one module wants written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOutput {
    pub(crate) files: Vec<GeneratedFile>,
    pub(crate) manifest: ManifestPatch,
    pub(crate) generated: Vec<String>,
}

impl ConfigOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&mut self, file: GeneratedFile) -> &mut Self {
        self.files.push(file);
        self
    }

    pub fn script(&mut self, name: &str, command: &str) -> &mut Self {
        self.manifest
            .scripts
            .insert(name.to_string(), command.to_string());
        self
    }

    pub fn scripts(&mut self, scripts: &IndexMap<String, String>) -> &mut Self {
        for (name, command) in scripts {
            self.script(name, command);
        }
        self
    }

    pub fn dependencies(&mut self, kind: DependencyKind, specs: &[String]) -> &mut Self {
        if !specs.is_empty() {
            self.manifest.dependencies.push((kind, specs.to_vec()));
        }
        self
    }

    pub fn field(&mut self, key: &str, value: Value) -> &mut Self {
        self.manifest.fields.insert(key.to_string(), value);
        self
    }

    /// Tag a path as generated once the output is applied.
    pub fn generated(&mut self, pattern: &str) -> &mut Self {
        self.generated.push(pattern.to_string());
        self
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn manifest(&self) -> &ManifestPatch {
        &self.manifest
    }

    pub fn generated_patterns(&self) -> &[String] {
        &self.generated
    }
}

/// Append `items` to `list`, skipping entries already present.
pub(crate) fn push_unique<I, S>(list: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for item in items {
        let item = item.into();
        if !list.contains(&item) {
            list.push(item);
        }
    }
}
