use serde_json::Value;

use super::{Builder, PrettierBuilder};
use crate::domain::{
    entities::anchored,
    error::DomainResult,
    synthesis::{GeneratedFile, Project},
    templates::commitlint,
};

const YAML_GLOB: &str = "**/*.{yml,yaml}";

/// Commit linting for action projects. lint-staged formats staged YAML with
/// the commands of the [`PrettierBuilder`] it is built from. Without one the
/// `lint-staged` table is left out.
#[derive(Debug)]
pub struct CommitLintBuilder {
    lint_commands: Vec<String>,
}

impl CommitLintBuilder {
    pub fn new(prettier: Option<&PrettierBuilder>) -> Self {
        Self {
            lint_commands: prettier
                .map(PrettierBuilder::lint_commands)
                .unwrap_or_default(),
        }
    }
}

impl Builder for CommitLintBuilder {
    fn name(&self) -> &'static str {
        "commitlint"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        project.add_file(GeneratedFile::lines(
            commitlint::CONFIG_PATH,
            commitlint::config_lines(),
        )?);

        if self.lint_commands.is_empty() {
            return Ok(());
        }
        let commands: Vec<&str> = self.lint_commands.iter().map(String::as_str).collect();
        let table = commitlint::lint_staged([(YAML_GLOB, commands.as_slice())]);
        project
            .manifest_mut()
            .add_field(commitlint::LINT_STAGED_FIELD, Value::Object(table));
        Ok(())
    }

    fn add_scripts(&self, project: &mut Project) {
        project.add_scripts(&[commitlint::COMMIT_SCRIPT]);
    }

    fn add_dev_dependencies(&self, project: &mut Project) -> DomainResult<()> {
        project.add_dev_dependencies(&commitlint::DEV_DEPENDENCIES)
    }

    fn generated_patterns(&self) -> Vec<String> {
        vec![anchored(commitlint::CONFIG_PATH)]
    }
}
