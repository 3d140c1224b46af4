use super::Builder;
use crate::domain::{
    entities::anchored,
    error::DomainResult,
    synthesis::{GeneratedFile, Project},
    templates::github::{self, GitHubFile},
};

const FILES: [GitHubFile; 7] = [
    GitHubFile::PullRequest,
    GitHubFile::BugIssue,
    GitHubFile::FeatureIssue,
    GitHubFile::QuestionIssue,
    GitHubFile::ReleaseWorkflow,
    GitHubFile::StaleWorkflow,
    GitHubFile::Cliff,
];

#[derive(Debug, Default)]
pub struct GitHubBuilder;

impl Builder for GitHubBuilder {
    fn name(&self) -> &'static str {
        "github"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        for file in FILES {
            project.add_file(GeneratedFile::lines(file.path(), file.lines())?);
        }
        Ok(())
    }

    fn generated_patterns(&self) -> Vec<String> {
        FILES
            .iter()
            .map(|f| anchored(f.path()))
            .chain(github::STATIC_PATTERNS.iter().map(|p| (*p).to_string()))
            .chain(std::iter::once(github::CHANGELOG_PATTERN.to_string()))
            .collect()
    }
}
