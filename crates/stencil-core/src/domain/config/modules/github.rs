//! Repository automation concern: issue and PR templates, workflows and
//! release-note config.

use std::any::Any;

use crate::domain::{
    config::{ApplyPhase, ConfigModule, ConfigOutput, ConfigStrategy, RegistrationContext},
    entities::anchored,
    error::DomainResult,
    synthesis::GeneratedFile,
    templates::github::{self, GitHubFile},
};

const DEFAULT_FILES: [GitHubFile; 7] = [
    GitHubFile::PullRequest,
    GitHubFile::BugIssue,
    GitHubFile::FeatureIssue,
    GitHubFile::HousekeepingIssue,
    GitHubFile::QuestionIssue,
    GitHubFile::ReleaseWorkflow,
    GitHubFile::Cliff,
];

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    strategy: ConfigStrategy,
    files: Vec<GitHubFile>,
}

impl GitHubConfig {
    pub fn new(strategy: ConfigStrategy) -> Self {
        Self {
            strategy,
            files: DEFAULT_FILES.to_vec(),
        }
    }

    /// Add `file`, replacing any template already bound to the same path.
    pub fn with_file(mut self, file: GitHubFile) -> Self {
        match self.files.iter().position(|f| f.path() == file.path()) {
            Some(index) => self.files[index] = file,
            None => self.files.push(file),
        }
        self
    }

    pub fn files(&self) -> &[GitHubFile] {
        &self.files
    }

    fn patterns(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|f| anchored(f.path()))
            .chain(github::STATIC_PATTERNS.iter().map(|p| (*p).to_string()))
            .chain(std::iter::once(github::CHANGELOG_PATTERN.to_string()))
            .collect()
    }
}

impl ConfigModule for GitHubConfig {
    fn strategy(&self) -> ConfigStrategy {
        self.strategy
    }

    fn register_config(&mut self, registry: &mut RegistrationContext<'_>) {
        if let Some(prettier) = registry.prettier() {
            prettier.add_ignore_patterns(self.patterns());
        }
    }

    fn apply_config(&self, _phase: &ApplyPhase) -> DomainResult<ConfigOutput> {
        let mut output = ConfigOutput::new();
        for file in &self.files {
            output.file(GeneratedFile::lines(file.path(), file.lines())?);
        }
        for pattern in self.patterns() {
            output.generated(&pattern);
        }
        Ok(output)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_file_replaces_same_path() {
        let github = GitHubConfig::new(ConfigStrategy::Active)
            .with_file(GitHubFile::PullRequestExtended)
            .with_file(GitHubFile::StoryIssue);

        assert_eq!(github.files().len(), DEFAULT_FILES.len() + 1);
        assert_eq!(github.files()[0], GitHubFile::PullRequestExtended);
    }

    #[test]
    fn tags_static_files_and_changelog() {
        let output = GitHubConfig::new(ConfigStrategy::Active)
            .apply_config(&ApplyPhase::new())
            .unwrap();
        let generated = output.generated_patterns();

        assert!(generated.contains(&"/.gitattributes".to_string()));
        assert!(generated.contains(&"/CHANGELOG.md".to_string()));
        assert!(generated.contains(&"/cliff.toml".to_string()));
        assert_eq!(output.files().len(), DEFAULT_FILES.len());
    }
}
