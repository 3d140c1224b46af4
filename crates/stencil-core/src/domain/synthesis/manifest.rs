//! `package.json` accumulator.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::domain::{error::DomainResult, value_objects::PackageSpec};

/// Which dependency table a package lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyKind {
    Runtime,
    Dev,
    Peer,
}

impl DependencyKind {
    const fn field(self) -> &'static str {
        match self {
            Self::Runtime => "dependencies",
            Self::Dev => "devDependencies",
            Self::Peer => "peerDependencies",
        }
    }
}

/// Project metadata written at the top of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub description: Option<String>,
    pub license: String,
    pub repository: Option<String>,
}

impl ProjectMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            license: "UNLICENSED".into(),
            repository: None,
        }
    }
}

/// In-memory `package.json`.
///
/// Scripts keep insertion order; dependency tables are sorted the way npm
/// writes them. Names in `removed_scripts` never reach the rendered output.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    metadata: ProjectMetadata,
    version: String,
    scripts: IndexMap<String, String>,
    dependencies: BTreeMap<DependencyKind, BTreeMap<String, String>>,
    fields: IndexMap<String, Value>,
    removed_scripts: BTreeSet<String>,
}

const ENTRY_POINT: &str = "lib/index.js";
const TYPES_ENTRY_POINT: &str = "lib/index.d.ts";

const KINDS: [DependencyKind; 3] = [
    DependencyKind::Runtime,
    DependencyKind::Dev,
    DependencyKind::Peer,
];

impl PackageManifest {
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self {
            metadata,
            version: "0.0.0".into(),
            scripts: IndexMap::new(),
            dependencies: BTreeMap::new(),
            fields: IndexMap::new(),
            removed_scripts: BTreeSet::new(),
        }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    // ── scripts ──────────────────────────────────────────────────────────────

    /// Add or replace a script. Names already marked removed are dropped.
    pub fn add_script(&mut self, name: &str, command: &str) {
        if self.removed_scripts.contains(name) {
            warn!(script = name, "Script is in the remove set and will not be emitted");
            return;
        }
        self.scripts.insert(name.to_string(), command.to_string());
    }

    /// Remove a script now and keep it out of the manifest for good.
    pub fn remove_script(&mut self, name: &str) {
        if self.scripts.shift_remove(name).is_some() {
            debug!(script = name, "Removed script");
        }
        self.removed_scripts.insert(name.to_string());
    }

    /// Effective command for a script, if it will be emitted.
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    pub fn scripts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.scripts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn removed_scripts(&self) -> &BTreeSet<String> {
        &self.removed_scripts
    }

    // ── dependencies ─────────────────────────────────────────────────────────

    /// Add a dependency. A versioned spec replaces an existing range; an
    /// unversioned one never overrides a range that is already there.
    pub fn add_dependency(&mut self, kind: DependencyKind, spec: &PackageSpec) {
        let table = self.dependencies.entry(kind).or_default();
        match (table.get(spec.name()), spec.range()) {
            (Some(_), None) => {}
            _ => {
                table.insert(spec.name().to_string(), spec.range_or_any().to_string());
            }
        }
    }

    pub fn add_dependencies<'a>(
        &mut self,
        kind: DependencyKind,
        specs: impl IntoIterator<Item = &'a str>,
    ) -> DomainResult<()> {
        for raw in specs {
            let spec: PackageSpec = raw.parse()?;
            self.add_dependency(kind, &spec);
        }
        Ok(())
    }

    pub fn dependency(&self, kind: DependencyKind, name: &str) -> Option<&str> {
        self.dependencies
            .get(&kind)
            .and_then(|t| t.get(name))
            .map(String::as_str)
    }

    // ── fields ───────────────────────────────────────────────────────────────

    /// Shallow merge: a top-level key set later replaces the earlier value
    /// wholesale, nested objects are not merged.
    pub fn add_field(&mut self, key: &str, value: Value) {
        if self.fields.insert(key.to_string(), value).is_some() {
            debug!(field = key, "Replaced manifest field");
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Apply a batch of changes recorded by a config module.
    pub fn apply(&mut self, patch: &ManifestPatch) -> DomainResult<()> {
        for (name, command) in &patch.scripts {
            self.add_script(name, command);
        }
        for (kind, specs) in &patch.dependencies {
            self.add_dependencies(*kind, specs.iter().map(String::as_str))?;
        }
        for (key, value) in &patch.fields {
            self.add_field(key, value.clone());
        }
        Ok(())
    }

    /// Render to the JSON document written as `package.json`.
    pub fn to_json(&self, marker: &str) -> Value {
        let mut doc = Map::new();
        doc.insert("//".into(), json!(marker));
        doc.insert("name".into(), json!(self.metadata.name));
        doc.insert("version".into(), json!(self.version));
        if let Some(description) = &self.metadata.description {
            doc.insert("description".into(), json!(description));
        }
        doc.insert("license".into(), json!(self.metadata.license));
        if let Some(url) = &self.metadata.repository {
            doc.insert("repository".into(), json!({ "type": "git", "url": url }));
        }
        doc.insert("main".into(), json!(ENTRY_POINT));
        doc.insert("types".into(), json!(TYPES_ENTRY_POINT));

        let scripts: Map<String, Value> = self
            .scripts
            .iter()
            .filter(|(name, _)| !self.removed_scripts.contains(*name))
            .map(|(name, cmd)| (name.clone(), json!(cmd)))
            .collect();
        doc.insert("scripts".into(), Value::Object(scripts));

        for kind in KINDS {
            if let Some(table) = self.dependencies.get(&kind) {
                if !table.is_empty() {
                    doc.insert(kind.field().into(), json!(table));
                }
            }
        }

        for (key, value) in &self.fields {
            doc.insert(key.clone(), value.clone());
        }

        Value::Object(doc)
    }
}

/// Manifest changes produced by one config module's apply step.
///
/// The patch is data only; whether it reaches the manifest is decided by the
/// module's strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestPatch {
    pub(crate) scripts: IndexMap<String, String>,
    pub(crate) dependencies: Vec<(DependencyKind, Vec<String>)>,
    pub(crate) fields: IndexMap<String, Value>,
}

impl ManifestPatch {
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
            && self.dependencies.iter().all(|(_, d)| d.is_empty())
            && self.fields.is_empty()
    }

    pub fn script_names(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(String::as_str)
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .flat_map(|(_, specs)| specs.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> PackageManifest {
        PackageManifest::new(ProjectMetadata::new("demo"))
    }

    #[test]
    fn removed_scripts_stay_removed() {
        let mut m = manifest();
        m.add_script("watch", "tsc -w");
        m.remove_script("watch");
        m.add_script("watch", "tsc -w");

        assert_eq!(m.script("watch"), None);
        let json = m.to_json("marker");
        assert!(json["scripts"].get("watch").is_none());
    }

    #[test]
    fn versioned_dependency_wins_over_bare() {
        let mut m = manifest();
        m.add_dependencies(DependencyKind::Dev, ["husky@^9.1.7", "husky"])
            .unwrap();
        assert_eq!(m.dependency(DependencyKind::Dev, "husky"), Some("^9.1.7"));

        m.add_dependencies(DependencyKind::Dev, ["husky@^9.2.0"]).unwrap();
        assert_eq!(m.dependency(DependencyKind::Dev, "husky"), Some("^9.2.0"));
    }

    #[test]
    fn dependency_tables_render_in_npm_order() {
        let mut m = manifest();
        m.add_dependencies(DependencyKind::Peer, ["constructs@^10.0.0"]).unwrap();
        m.add_dependencies(DependencyKind::Runtime, ["zod@^3.24.1"]).unwrap();
        let json = m.to_json("marker");
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();

        let runtime = keys.iter().position(|k| *k == "dependencies").unwrap();
        let peer = keys.iter().position(|k| *k == "peerDependencies").unwrap();
        assert!(runtime < peer);
        assert!(json.get("devDependencies").is_none());
        assert_eq!(json["peerDependencies"]["constructs"], "^10.0.0");
    }

    #[test]
    fn fields_merge_shallowly() {
        let mut m = manifest();
        m.add_field("lint-staged", json!({ "*.yml": ["a"] }));
        m.add_field("lint-staged", json!({ "*.ts": ["b"] }));

        assert_eq!(m.field("lint-staged"), Some(&json!({ "*.ts": ["b"] })));
    }

    #[test]
    fn renders_metadata_before_scripts() {
        let mut meta = ProjectMetadata::new("demo");
        meta.repository = Some("https://github.com/acme/demo".into());
        let m = PackageManifest::new(meta);
        let json = m.to_json("marker");
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();

        assert_eq!(keys[..3], ["//", "name", "version"]);
        assert_eq!(json["repository"]["type"], "git");
        assert_eq!(json["license"], "UNLICENSED");
    }

    #[test]
    fn rejects_malformed_specs() {
        let mut m = manifest();
        assert!(m.add_dependencies(DependencyKind::Runtime, ["@"]).is_err());
    }
}
