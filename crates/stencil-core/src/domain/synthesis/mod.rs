//! In-memory synthesis engine.
//!
//! A [`Project`] accumulates everything builders and config modules
//! contribute: manifest entries, files, generated-path markers and ignore
//! patterns. [`Project::synthesize`] turns that state into a
//! [`ProjectStructure`] without touching the filesystem.

pub mod file;
pub mod manifest;

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::{
    entities::{ProjectStructure, RelativePath, anchored},
    error::DomainResult,
    templates::{MARKER, hash_header},
    value_objects::{ConfigKey, ProjectKind},
};

pub use file::{FileBody, GeneratedFile};
pub use manifest::{DependencyKind, ManifestPatch, PackageManifest, ProjectMetadata};

/// Tasks the generation framework puts into every new manifest.
pub const SCAFFOLD_SCRIPTS: [&str; 18] = [
    "build",
    "bump",
    "clobber",
    "compile",
    "default",
    "eject",
    "eslint",
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
];

const DEFAULT_GIT_IGNORE: [&str; 7] = [
    "/node_modules/",
    "/lib",
    "/dist",
    "/coverage/",
    "*.log",
    ".env",
    "tsconfig.tsbuildinfo",
];

pub const MANIFEST_PATH: &str = "package.json";
pub const GIT_ATTRIBUTES_PATH: &str = ".gitattributes";
pub const GIT_IGNORE_PATH: &str = ".gitignore";

/// What a `Shadow` concern would have written.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedContribution {
    pub concern: ConfigKey,
    pub files: Vec<RelativePath>,
    pub scripts: Vec<String>,
    pub dependencies: Vec<String>,
}

/// The project being synthesized. Shared by every builder and config module
/// of one profile; mutation is append-only apart from script removal.
#[derive(Debug, Clone)]
pub struct Project {
    kind: ProjectKind,
    manifest: PackageManifest,
    files: Vec<GeneratedFile>,
    generated: BTreeSet<String>,
    format_ignore: Vec<String>,
    tracked: Vec<TrackedContribution>,
}

impl Project {
    pub fn new(kind: ProjectKind, metadata: ProjectMetadata) -> Self {
        let mut manifest = PackageManifest::new(metadata);
        for task in SCAFFOLD_SCRIPTS {
            manifest.add_script(task, &format!("npx projen {task}"));
        }

        Self {
            kind,
            manifest,
            files: Vec::new(),
            generated: BTreeSet::new(),
            format_ignore: Vec::new(),
            tracked: Vec::new(),
        }
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn manifest(&self) -> &PackageManifest {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut PackageManifest {
        &mut self.manifest
    }

    // ── engine primitives ────────────────────────────────────────────────────

    pub fn add_file(&mut self, file: GeneratedFile) {
        debug!(path = %file.path(), "Queued file");
        self.files.push(file);
    }

    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path().as_str() == path)
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn add_scripts(&mut self, scripts: &[(&str, &str)]) {
        for (name, command) in scripts {
            self.manifest.add_script(name, command);
        }
    }

    pub fn add_dev_dependencies(&mut self, specs: &[&str]) -> DomainResult<()> {
        self.manifest
            .add_dependencies(DependencyKind::Dev, specs.iter().copied())
    }

    /// Tag a path as `linguist-generated` in `.gitattributes`.
    pub fn annotate_generated(&mut self, pattern: &str) {
        self.generated.insert(anchored(pattern));
    }

    pub fn generated_patterns(&self) -> impl Iterator<Item = &str> {
        self.generated.iter().map(String::as_str)
    }

    /// Add a pattern to the formatter ignore list rendered into
    /// [`FileBody::FormatIgnore`] files. Duplicates are dropped.
    pub fn add_format_ignore(&mut self, pattern: &str) {
        let pattern = anchored(pattern);
        if !self.format_ignore.contains(&pattern) {
            self.format_ignore.push(pattern);
        }
    }

    pub fn format_ignore_patterns(&self) -> &[String] {
        &self.format_ignore
    }

    // ── strategy targets ─────────────────────────────────────────────────────

    /// Write a concern's output for real.
    pub(crate) fn materialize(
        &mut self,
        files: Vec<GeneratedFile>,
        patch: &ManifestPatch,
        generated: &[String],
    ) -> DomainResult<()> {
        self.manifest.apply(patch)?;
        for file in files {
            self.add_file(file);
        }
        for pattern in generated {
            self.annotate_generated(pattern);
        }
        Ok(())
    }

    /// Record a concern's output without emitting it. Generated paths are
    /// still tagged because the framework owns those files.
    pub(crate) fn track(
        &mut self,
        concern: ConfigKey,
        files: Vec<GeneratedFile>,
        patch: &ManifestPatch,
        generated: &[String],
    ) {
        for file in &files {
            if self.file(file.path().as_str()).is_some() {
                warn!(
                    concern = %concern,
                    path = %file.path(),
                    "Tracked file collides with an emitted file"
                );
            }
        }
        for pattern in generated {
            self.annotate_generated(pattern);
        }
        self.tracked.push(TrackedContribution {
            concern,
            files: files.into_iter().map(|f| f.path().clone()).collect(),
            scripts: patch.script_names().map(str::to_string).collect(),
            dependencies: patch.dependency_names().map(str::to_string).collect(),
        });
    }

    pub fn tracked(&self) -> &[TrackedContribution] {
        &self.tracked
    }

    // ── synthesis ────────────────────────────────────────────────────────────

    /// Render every accumulator into a sorted, validated structure rooted
    /// at `root`. Two contributions for one path fail with `DuplicatePath`.
    pub fn synthesize(&self, root: impl Into<PathBuf>) -> DomainResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(root);

        let manifest = GeneratedFile::json(MANIFEST_PATH, self.manifest.to_json(MARKER))?;
        let attributes = GeneratedFile::lines(GIT_ATTRIBUTES_PATH, self.render_attributes())?;
        let ignore = GeneratedFile::lines(GIT_IGNORE_PATH, Self::render_git_ignore())?;

        for file in [&manifest, &attributes, &ignore].into_iter().chain(&self.files) {
            let content = file.render(&self.format_ignore)?;
            structure.add_file(file.path().as_path(), content, file.permissions());
        }

        structure.sort();
        structure.validate()?;
        debug!(files = structure.file_count(), "Synthesized project");
        Ok(structure)
    }

    fn render_attributes(&self) -> Vec<String> {
        hash_header()
            .into_iter()
            .chain(
                self.generated
                    .iter()
                    .map(|p| format!("{p} linguist-generated")),
            )
            .collect()
    }

    fn render_git_ignore() -> Vec<String> {
        hash_header()
            .into_iter()
            .chain(DEFAULT_GIT_IGNORE.iter().map(|p| (*p).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project() -> Project {
        Project::new(ProjectKind::Library, ProjectMetadata::new("demo"))
    }

    #[test]
    fn seeds_scaffold_scripts() {
        let p = project();
        assert_eq!(p.manifest().script("compile"), Some("npx projen compile"));
        assert_eq!(p.manifest().scripts().count(), SCAFFOLD_SCRIPTS.len());
    }

    #[test]
    fn synthesizes_core_files_sorted() {
        let structure = project().synthesize("out").unwrap();
        let paths: Vec<String> = structure
            .files()
            .map(|f| f.path.display().to_string())
            .collect();

        assert_eq!(paths, vec![".gitattributes", ".gitignore", "package.json"]);
    }

    #[test]
    fn gitattributes_lists_sorted_generated_paths() {
        let mut p = project();
        p.annotate_generated("CHANGELOG.md");
        p.annotate_generated("/.husky/commit-msg");

        let structure = p.synthesize("out").unwrap();
        let attributes = &structure.file(".gitattributes").unwrap().content;

        assert_eq!(
            attributes,
            &format!(
                "# ~~ {MARKER}\n\n/.husky/commit-msg linguist-generated\n/CHANGELOG.md linguist-generated\n"
            )
        );
    }

    #[test]
    fn duplicate_files_fail_synthesis() {
        let mut p = project();
        p.add_file(GeneratedFile::lines("cliff.toml", vec![]).unwrap());
        p.add_file(GeneratedFile::lines("cliff.toml", vec![]).unwrap());

        assert!(matches!(
            p.synthesize("out"),
            Err(crate::domain::DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn shadow_tracking_tags_but_does_not_emit() {
        let mut p = project();
        let file = GeneratedFile::lines("tsconfig.json", vec![]).unwrap();
        let mut patch = ManifestPatch::default();
        patch.scripts.insert("tsc".into(), "tsc".into());

        p.track(ConfigKey::TypeScript, vec![file], &patch, &["/tsconfig.json".into()]);

        assert!(p.file("tsconfig.json").is_none());
        assert_eq!(p.manifest().script("tsc"), None);
        assert_eq!(p.tracked()[0].scripts, vec!["tsc".to_string()]);
        assert!(p.generated_patterns().any(|g| g == "/tsconfig.json"));
    }
}
