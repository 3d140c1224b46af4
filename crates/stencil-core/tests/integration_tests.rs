//! End-to-end synthesis of every profile, checked on the rendered files.

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use stencil_core::domain::{
    ConcernMode, ConfigKey, ConfigStrategy, ProfileOptions, ProjectKind, ProjectProfile,
    ProjectStructure, Synthesis,
    templates::{MARKER, commitlint, husky},
};

fn synthesize(kind: ProjectKind, options: ProfileOptions) -> Synthesis {
    ProjectProfile::new(kind, options)
        .synthesize("out")
        .expect("profile should synthesize")
}

fn content<'a>(structure: &'a ProjectStructure, path: &str) -> &'a str {
    &structure
        .file(path)
        .unwrap_or_else(|| panic!("{path} missing"))
        .content
}

fn manifest(structure: &ProjectStructure) -> Value {
    serde_json::from_str(content(structure, "package.json")).expect("package.json is JSON")
}

fn generated_set(structure: &ProjectStructure) -> BTreeSet<String> {
    content(structure, ".gitattributes")
        .lines()
        .filter_map(|l| l.strip_suffix(" linguist-generated"))
        .map(str::to_string)
        .collect()
}

fn prettier_ignore_set(structure: &ProjectStructure) -> BTreeSet<String> {
    content(structure, ".prettierignore")
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// GitHub Action
// ============================================================================

#[test]
fn github_action_wires_husky_and_commitlint() {
    let synthesis = synthesize(ProjectKind::GitHubAction, ProfileOptions::new("my-action"));
    let structure = &synthesis.structure;

    let hook = content(structure, husky::COMMIT_MSG_PATH);
    assert_eq!(hook.lines().last(), Some(r#"npx --no-install commitlint --edit "$1""#));
    assert!(hook.starts_with(&format!("# {MARKER}")));
    assert!(
        structure
            .file(husky::COMMIT_MSG_PATH)
            .unwrap()
            .permissions
            .executable_flag()
    );

    let manifest = manifest(structure);
    assert_eq!(manifest["scripts"]["prepare"], json!("husky || true"));
    assert_eq!(
        manifest["lint-staged"],
        json!({ "**/*.{yml,yaml}": ["npm run format:message", "npm run format:fix"] })
    );

    assert!(generated_set(structure).contains("/.husky/commit-msg"));
}

#[test]
fn github_action_strips_framework_tasks_but_keeps_build() {
    let synthesis = synthesize(ProjectKind::GitHubAction, ProfileOptions::new("my-action"));
    let scripts = manifest(&synthesis.structure)["scripts"].clone();

    assert_eq!(scripts["build"], json!("npx projen build"));
    for removed in ["bump", "clobber", "eject", "eslint", "projen", "test"] {
        assert!(scripts.get(removed).is_none(), "{removed} should be gone");
    }
    assert_eq!(scripts["format:fix"], json!("prettier . --write"));
}

#[test]
fn github_action_sample_is_not_tagged() {
    let synthesis = synthesize(ProjectKind::GitHubAction, ProfileOptions::new("my-action"));

    assert!(synthesis.structure.file("action.yml").is_some());
    assert!(!generated_set(&synthesis.structure).contains("/action.yml"));

    let without = synthesize(
        ProjectKind::GitHubAction,
        ProfileOptions::new("my-action").sample_code(false),
    );
    assert!(without.structure.file("action.yml").is_none());
}

#[test]
fn github_action_reports_builders() {
    let synthesis = synthesize(ProjectKind::GitHubAction, ProfileOptions::new("my-action"));

    assert!(
        synthesis
            .report
            .concerns
            .iter()
            .all(|c| c.mode == ConcernMode::Builder)
    );
    assert!(synthesis.report.tracked.is_empty());
}

// ============================================================================
// Service
// ============================================================================

const SERVICE_REMOVED: [&str; 14] = [
    "clobber", "compile", "default", "eject", "package", "post-compile", "post-upgrade",
    "pre-compile", "release", "unbump", "upgrade", "watch", "projen", "bump",
];

#[test]
fn service_removes_framework_tasks() {
    let synthesis = synthesize(ProjectKind::Service, ProfileOptions::new("my-service"));
    let scripts = manifest(&synthesis.structure)["scripts"].clone();

    for removed in SERVICE_REMOVED {
        assert!(scripts.get(removed).is_none(), "{removed} should be gone");
    }
    for present in ["start", "build", "test", "prettier", "prettier:cds", "commit", "eslint", "prepare"] {
        assert!(scripts.get(present).is_some(), "{present} should be present");
    }
    assert_eq!(scripts["test"], json!("jest --passWithNoTests --updateSnapshot"));
}

#[test]
fn service_removes_framework_tasks_when_npm_is_not_active() {
    for (label, options) in [
        ("npm tracked", ProfileOptions::new("svc").track(ConfigKey::Npm)),
        ("npm disabled", ProfileOptions::new("svc").disable(ConfigKey::Npm)),
        ("framework off", ProfileOptions::new("svc").framework_enabled(false)),
    ] {
        let synthesis = synthesize(ProjectKind::Service, options);
        let scripts = manifest(&synthesis.structure)["scripts"].clone();

        for removed in SERVICE_REMOVED {
            assert!(scripts.get(removed).is_none(), "{removed} kept with {label}");
        }
    }
}

#[test]
fn service_lint_staged_override_replaces_base_set() {
    let synthesis = synthesize(ProjectKind::Service, ProfileOptions::new("my-service"));
    let lint_staged = manifest(&synthesis.structure)["lint-staged"].clone();

    assert_eq!(lint_staged, Value::Object(commitlint::service_lint_staged()));
    assert!(lint_staged.get("**/*.{yml,yaml}").is_none());
}

#[test]
fn service_manifest_carries_dependencies_and_imports() {
    let synthesis = synthesize(ProjectKind::Service, ProfileOptions::new("my-service"));
    let manifest = manifest(&synthesis.structure);

    assert_eq!(manifest["dependencies"]["@sap/cds"], json!("^8.6.1"));
    assert_eq!(manifest["devDependencies"]["husky"], json!("^9.1.7"));
    assert_eq!(manifest["imports"]["#dispatcher"], json!("./@dispatcher/index.js"));
    assert_eq!(manifest["files"], json!(["gen", "README.md"]));
}

#[test]
fn service_tags_generated_build_output() {
    let synthesis = synthesize(ProjectKind::Service, ProfileOptions::new("my-service"));
    let generated = generated_set(&synthesis.structure);

    for pattern in ["/@cds-models", "/dist", "/gen", "/package.json", "/tsconfig.json"] {
        assert!(generated.contains(pattern), "{pattern} should be tagged");
    }
    assert!(content(&synthesis.structure, "eslint.config.mjs").contains("'docs/'"));
}

#[test]
fn tracked_concern_is_recorded_not_written() {
    let synthesis = synthesize(
        ProjectKind::Service,
        ProfileOptions::new("my-service").track(ConfigKey::GitHub),
    );

    assert!(synthesis.structure.file("cliff.toml").is_none());
    assert!(generated_set(&synthesis.structure).contains("/cliff.toml"));
    assert_eq!(synthesis.report.tracked.len(), 1);
    assert_eq!(synthesis.report.tracked[0].concern, ConfigKey::GitHub);
}

#[test]
fn disabled_concern_contributes_nothing() {
    let synthesis = synthesize(
        ProjectKind::Service,
        ProfileOptions::new("my-service").disable(ConfigKey::Husky),
    );
    let manifest = manifest(&synthesis.structure);

    assert!(synthesis.structure.file(husky::COMMIT_MSG_PATH).is_none());
    assert!(manifest["scripts"].get("prepare").is_none());
    assert!(manifest["devDependencies"].get("husky").is_none());
    assert!(!generated_set(&synthesis.structure).contains("/.husky/commit-msg"));
}

#[test]
fn framework_disabled_turns_every_module_off() {
    let synthesis = synthesize(
        ProjectKind::Service,
        ProfileOptions::new("my-service").framework_enabled(false),
    );

    assert!(
        synthesis
            .report
            .concerns
            .iter()
            .all(|c| c.mode == ConcernMode::from(ConfigStrategy::Disabled))
    );
    let paths: Vec<String> = synthesis
        .structure
        .files()
        .map(|f| f.path.display().to_string())
        .collect();
    assert_eq!(paths, vec![".gitattributes", ".gitignore", "package.json"]);
}

// ============================================================================
// Library
// ============================================================================

#[test]
fn library_uses_dev_tsconfig_and_library_lint_rules() {
    let synthesis = synthesize(ProjectKind::Library, ProfileOptions::new("my-lib"));
    let structure = &synthesis.structure;

    assert!(structure.file("tsconfig.dev.json").is_some());
    assert!(structure.file("tsconfig.json").is_none());

    let eslint = content(structure, "eslint.config.mjs");
    assert!(eslint.contains("'@typescript-eslint/no-empty-function': 'off'"));
    assert!(eslint.contains("'.jsii'"));

    assert_eq!(manifest(structure)["files"], json!(["lib", ".jsii", "README.md"]));
}

// ============================================================================
// Cross-profile properties
// ============================================================================

#[test]
fn prettier_ignore_matches_generated_attributes() {
    for kind in ProjectKind::ALL {
        let synthesis = synthesize(kind, ProfileOptions::new("demo"));
        assert_eq!(
            prettier_ignore_set(&synthesis.structure),
            generated_set(&synthesis.structure),
            "ignore/attributes mismatch for {kind}"
        );
    }
}

#[test]
fn prettier_ignore_matches_with_shadow_concerns() {
    let options = ProfileOptions::new("demo")
        .track(ConfigKey::GitHub)
        .track(ConfigKey::VsCode);
    let synthesis = synthesize(ProjectKind::Library, options);

    assert_eq!(
        prettier_ignore_set(&synthesis.structure),
        generated_set(&synthesis.structure)
    );
}

#[test]
fn synthesis_is_idempotent() {
    for kind in ProjectKind::ALL {
        let options = ProfileOptions::new("demo")
            .description("Demo project")
            .repository("https://github.com/acme/demo.git");
        let first = synthesize(kind, options.clone());
        let second = synthesize(kind, options);

        assert_eq!(first.structure, second.structure);
    }
}

#[test]
fn every_generated_file_is_marked_and_newline_terminated() {
    for kind in ProjectKind::ALL {
        let synthesis = synthesize(kind, ProfileOptions::new("demo"));
        for file in synthesis.structure.files() {
            assert!(file.content.ends_with('\n'), "{}", file.path.display());
            assert!(!file.content.ends_with("\n\n"), "{}", file.path.display());
            // The starter action is user-owned; registry hooks stay one-liners.
            let user_owned = file.path.ends_with("action.yml");
            let bare_hook = kind.uses_config_registry() && file.path.starts_with(".husky");
            if !user_owned && !bare_hook {
                assert!(file.content.contains(MARKER), "{}", file.path.display());
            }
        }
    }
}

#[test]
fn manifest_metadata_comes_from_options() {
    let synthesis = synthesize(
        ProjectKind::Library,
        ProfileOptions::new("@acme/widgets")
            .description("Widgets")
            .license("Apache-2.0")
            .repository("https://github.com/acme/widgets.git"),
    );
    let manifest = manifest(&synthesis.structure);

    assert_eq!(manifest["//"], json!(MARKER));
    assert_eq!(manifest["name"], json!("@acme/widgets"));
    assert_eq!(manifest["license"], json!("Apache-2.0"));
    assert_eq!(
        manifest["repository"],
        json!({ "type": "git", "url": "https://github.com/acme/widgets.git" })
    );
}
