use super::Builder;
use crate::domain::{
    entities::anchored,
    error::DomainResult,
    synthesis::{GeneratedFile, Project},
    templates::devcontainer,
};

#[derive(Debug, Default)]
pub struct DevContainerBuilder;

impl Builder for DevContainerBuilder {
    fn name(&self) -> &'static str {
        "devcontainer"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        let features: Vec<String> = devcontainer::BASE_FEATURES
            .iter()
            .chain(std::iter::once(&devcontainer::GENERATOR_FEATURE))
            .map(|f| (*f).to_string())
            .collect();
        let extensions: Vec<String> = devcontainer::EXTENSIONS
            .iter()
            .map(|e| (*e).to_string())
            .collect();

        project.add_file(GeneratedFile::json(
            devcontainer::PATH,
            devcontainer::descriptor(&features, &extensions),
        )?);
        Ok(())
    }

    fn add_scripts(&self, project: &mut Project) {
        project.add_scripts(&[devcontainer::INSTALL_SCRIPT]);
    }

    fn generated_patterns(&self) -> Vec<String> {
        vec![anchored(devcontainer::PATH)]
    }
}
