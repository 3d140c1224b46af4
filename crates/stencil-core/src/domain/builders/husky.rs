use super::Builder;
use crate::domain::{
    entities::anchored,
    error::DomainResult,
    synthesis::{GeneratedFile, Project},
    templates::husky,
};

/// Git hooks. Each hook file is executable and carries the marker.
#[derive(Debug, Default)]
pub struct HuskyBuilder;

impl Builder for HuskyBuilder {
    fn name(&self) -> &'static str {
        "husky"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        for (path, command) in husky::HOOKS {
            project.add_file(GeneratedFile::lines(path, husky::hook_lines(command, true))?.executable());
        }
        Ok(())
    }

    fn add_scripts(&self, project: &mut Project) {
        project.add_scripts(&[husky::PREPARE_SCRIPT]);
    }

    fn add_dev_dependencies(&self, project: &mut Project) -> DomainResult<()> {
        project.add_dev_dependencies(&[husky::DEV_DEPENDENCY])
    }

    fn generated_patterns(&self) -> Vec<String> {
        husky::HOOKS.iter().map(|(path, _)| anchored(path)).collect()
    }
}
