use std::path::PathBuf;

use crate::domain::{
    builders::{
        self, Builder, CommitLintBuilder, DevContainerBuilder, GitHubBuilder, HuskyBuilder,
        NpmPackageBuilder, PrettierBuilder, SampleCodeBuilder, VsCodeBuilder,
    },
    error::DomainResult,
    synthesis::Project,
    value_objects::{ConfigKey, ProjectKind},
};

use super::{ConcernMode, ConcernReport, ProfileOptions, Synthesis, SynthesisReport};

pub(super) const CONCERNS: &[ConfigKey] = &[
    ConfigKey::Npm,
    ConfigKey::DevContainer,
    ConfigKey::VsCode,
    ConfigKey::GitHub,
    ConfigKey::Prettier,
    ConfigKey::Husky,
    ConfigKey::CommitLint,
];

/// Builder-based profile for composite GitHub Actions.
#[derive(Debug)]
pub struct GitHubActionProfile {
    options: ProfileOptions,
    builders: Vec<(Option<ConfigKey>, Box<dyn Builder>)>,
}

impl GitHubActionProfile {
    pub fn new(options: ProfileOptions) -> Self {
        let prettier = PrettierBuilder;
        let commitlint = CommitLintBuilder::new(
            options
                .is_enabled(ConfigKey::Prettier)
                .then_some(&prettier),
        );

        let mut builders: Vec<(Option<ConfigKey>, Box<dyn Builder>)> = vec![
            (Some(ConfigKey::Npm), Box::new(NpmPackageBuilder)),
            (Some(ConfigKey::DevContainer), Box::new(DevContainerBuilder)),
            (Some(ConfigKey::VsCode), Box::new(VsCodeBuilder)),
            (Some(ConfigKey::GitHub), Box::new(GitHubBuilder)),
            (Some(ConfigKey::Prettier), Box::new(prettier)),
            (Some(ConfigKey::Husky), Box::new(HuskyBuilder)),
            (Some(ConfigKey::CommitLint), Box::new(commitlint)),
        ];
        if options.sample_code {
            builders.push((None, Box::new(SampleCodeBuilder)));
        }

        Self { options, builders }
    }

    pub(super) fn synthesize(self, root: impl Into<PathBuf>) -> DomainResult<Synthesis> {
        let mut project = Project::new(ProjectKind::GitHubAction, self.options.metadata.clone());
        let mut concerns = Vec::with_capacity(CONCERNS.len());

        for (key, builder) in &self.builders {
            let enabled = key.is_none_or(|k| self.options.is_enabled(k));
            if enabled {
                builders::initialize(builder.as_ref(), &mut project)?;
            }
            if let Some(concern) = key {
                concerns.push(ConcernReport {
                    concern: *concern,
                    mode: if enabled {
                        ConcernMode::Builder
                    } else {
                        ConcernMode::Skipped
                    },
                });
            }
        }

        Ok(Synthesis {
            structure: project.synthesize(root)?,
            report: SynthesisReport {
                kind: ProjectKind::GitHubAction,
                concerns,
                tracked: Vec::new(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        profiles::tests::{assert_emitted_verbatim, emitted_scripts},
        synthesis::MANIFEST_PATH,
        templates::{commitlint, husky, prettier},
    };
    use serde_json::Value;

    fn scripts_of(project: &Project) -> Vec<(String, String)> {
        project
            .manifest()
            .scripts()
            .map(|(name, command)| (name.to_string(), command.to_string()))
            .collect()
    }

    /// Scripts each enabled builder adds when run against a fresh project.
    fn contributed_scripts(profile: &GitHubActionProfile) -> Vec<(String, String)> {
        let mut contributed = Vec::new();
        for (key, builder) in &profile.builders {
            if !key.is_none_or(|k| profile.options.is_enabled(k)) {
                continue;
            }
            let mut project =
                Project::new(ProjectKind::GitHubAction, profile.options.metadata.clone());
            let before = scripts_of(&project);
            builder.add_scripts(&mut project);
            contributed.extend(
                scripts_of(&project)
                    .into_iter()
                    .filter(|pair| !before.contains(pair)),
            );
        }
        contributed
    }

    fn manifest(options: ProfileOptions) -> Value {
        let synthesis = GitHubActionProfile::new(options).synthesize("out").unwrap();
        let file = synthesis.structure.file(MANIFEST_PATH).unwrap();
        serde_json::from_str(&file.content).unwrap()
    }

    #[test]
    fn every_builder_script_is_emitted_verbatim() {
        let options = ProfileOptions::new("action");
        let contributed = contributed_scripts(&GitHubActionProfile::new(options.clone()));

        for (name, command) in prettier::FORMAT_SCRIPTS
            .into_iter()
            .chain([husky::PREPARE_SCRIPT, commitlint::COMMIT_SCRIPT])
        {
            assert!(
                contributed.contains(&(name.to_string(), command.to_string())),
                "'{name}' was not contributed"
            );
        }

        let synthesis = GitHubActionProfile::new(options).synthesize("out").unwrap();
        assert_emitted_verbatim(&contributed, &emitted_scripts(&synthesis.structure));
    }

    #[test]
    fn lint_staged_only_runs_emitted_scripts() {
        let manifest = manifest(ProfileOptions::new("action"));
        let commands = manifest[commitlint::LINT_STAGED_FIELD]["**/*.{yml,yaml}"]
            .as_array()
            .unwrap();

        assert!(!commands.is_empty());
        for command in commands {
            let name = command.as_str().unwrap().trim_start_matches("npm run ");
            assert!(manifest["scripts"].get(name).is_some(), "'{name}' missing");
        }
    }

    #[test]
    fn lint_staged_is_left_out_without_prettier() {
        let manifest = manifest(ProfileOptions::new("action").disable(ConfigKey::Prettier));

        assert!(manifest.get(commitlint::LINT_STAGED_FIELD).is_none());
        assert!(manifest["scripts"].get("format:fix").is_none());
        assert_eq!(manifest["scripts"]["commit"], "commit");
    }
}
