use super::Builder;
use crate::domain::{
    entities::anchored,
    error::DomainResult,
    synthesis::{GeneratedFile, Project},
    templates::vscode,
};

#[derive(Debug, Default)]
pub struct VsCodeBuilder;

impl Builder for VsCodeBuilder {
    fn name(&self) -> &'static str {
        "vscode"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        project.add_file(GeneratedFile::json(vscode::SETTINGS_PATH, vscode::settings())?);
        Ok(())
    }

    fn generated_patterns(&self) -> Vec<String> {
        vec![anchored(vscode::SETTINGS_PATH)]
    }
}
