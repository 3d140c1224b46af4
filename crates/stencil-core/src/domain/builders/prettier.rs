use super::Builder;
use crate::domain::{
    entities::anchored,
    error::DomainResult,
    synthesis::{GeneratedFile, Project},
    templates::prettier,
};

/// Formatter config. The ignore file is rendered last, from every pattern
/// the other builders registered.
#[derive(Debug, Default)]
pub struct PrettierBuilder;

impl PrettierBuilder {
    /// Commands lint-staged should run to format staged files.
    pub fn lint_commands(&self) -> Vec<String> {
        prettier::FORMAT_SCRIPTS
            .iter()
            .map(|(name, _)| format!("npm run {name}"))
            .collect()
    }
}

impl Builder for PrettierBuilder {
    fn name(&self) -> &'static str {
        "prettier"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        project.add_file(GeneratedFile::json(prettier::RC_PATH, prettier::rc())?);
        project.add_file(GeneratedFile::format_ignore(prettier::IGNORE_PATH)?);
        Ok(())
    }

    fn add_scripts(&self, project: &mut Project) {
        project.add_scripts(&prettier::FORMAT_SCRIPTS);
    }

    fn add_dev_dependencies(&self, project: &mut Project) -> DomainResult<()> {
        project.add_dev_dependencies(&[prettier::DEV_DEPENDENCY])
    }

    fn generated_patterns(&self) -> Vec<String> {
        vec![anchored(prettier::IGNORE_PATH), anchored(prettier::RC_PATH)]
    }
}
