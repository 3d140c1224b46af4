//! Registry-free builders.
//!
//! A builder writes straight into the [`Project`] through a fixed pipeline.
//! When it needs data from another builder it receives that builder by
//! reference at construction.

mod commitlint;
mod devcontainer;
mod github;
mod husky;
mod package;
mod prettier;
mod sample;
mod vscode;

use std::fmt;

use tracing::debug;

use crate::domain::{error::DomainResult, synthesis::Project};

pub use commitlint::CommitLintBuilder;
pub use devcontainer::DevContainerBuilder;
pub use github::GitHubBuilder;
pub use husky::HuskyBuilder;
pub use package::NpmPackageBuilder;
pub use prettier::PrettierBuilder;
pub use sample::SampleCodeBuilder;
pub use vscode::VsCodeBuilder;

pub trait Builder: fmt::Debug {
    fn name(&self) -> &'static str;

    fn add_templates(&self, project: &mut Project) -> DomainResult<()>;

    fn add_scripts(&self, _project: &mut Project) {}

    fn add_dev_dependencies(&self, _project: &mut Project) -> DomainResult<()> {
        Ok(())
    }

    /// Paths this builder owns.
    fn generated_patterns(&self) -> Vec<String> {
        Vec::new()
    }

    /// Mark owned paths as generated and keep the formatter off them.
    fn add_git_attributes(&self, project: &mut Project) {
        for pattern in self.generated_patterns() {
            project.annotate_generated(&pattern);
            project.add_format_ignore(&pattern);
        }
    }
}

/// Run `builder` through templates, scripts, dev dependencies and git
/// attributes, in that order.
pub fn initialize(builder: &dyn Builder, project: &mut Project) -> DomainResult<()> {
    debug!(builder = builder.name(), "Initializing builder");
    builder.add_templates(project)?;
    builder.add_scripts(project);
    builder.add_dev_dependencies(project)?;
    builder.add_git_attributes(project);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        synthesis::{GeneratedFile, ProjectMetadata},
        value_objects::ProjectKind,
    };
    use std::cell::RefCell;

    #[derive(Debug, Default)]
    struct Recording {
        calls: RefCell<Vec<&'static str>>,
    }

    impl Builder for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
            self.calls.borrow_mut().push("templates");
            project.add_file(GeneratedFile::lines("notes.txt", vec!["hi".into()])?);
            Ok(())
        }

        fn add_scripts(&self, _project: &mut Project) {
            self.calls.borrow_mut().push("scripts");
        }

        fn add_dev_dependencies(&self, _project: &mut Project) -> DomainResult<()> {
            self.calls.borrow_mut().push("dev-dependencies");
            Ok(())
        }

        fn generated_patterns(&self) -> Vec<String> {
            self.calls.borrow_mut().push("git-attributes");
            vec!["/notes.txt".into()]
        }
    }

    #[test]
    fn pipeline_runs_in_fixed_order() {
        let mut project = Project::new(ProjectKind::GitHubAction, ProjectMetadata::new("demo"));
        let builder = Recording::default();

        initialize(&builder, &mut project).unwrap();

        assert_eq!(
            *builder.calls.borrow(),
            vec!["templates", "scripts", "dev-dependencies", "git-attributes"]
        );
        assert_eq!(project.format_ignore_patterns(), ["/notes.txt"]);
        assert!(project.generated_patterns().any(|p| p == "/notes.txt"));
    }
}
