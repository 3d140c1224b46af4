use super::Builder;
use crate::domain::{
    error::DomainResult,
    synthesis::{GeneratedFile, Project},
    templates::sample,
};

/// Starter `action.yml`. Owned by the user after the first run, so it is
/// neither tagged nor formatter-ignored.
#[derive(Debug, Default)]
pub struct SampleCodeBuilder;

impl Builder for SampleCodeBuilder {
    fn name(&self) -> &'static str {
        "sample-code"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        let lines = sample::ACTION.iter().map(|l| (*l).to_string()).collect();
        project.add_file(GeneratedFile::lines(sample::ACTION_PATH, lines)?);
        Ok(())
    }
}
