//! Synthesis Service - main application orchestrator.
//!
//! 1. Validate the project name
//! 2. Run the profile for the requested kind
//! 3. Write the resulting structure through the `Filesystem` port

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ConfigKey, DomainValidator as validator, ProfileOptions, ProjectKind, ProjectProfile,
        ProjectStructure, SynthesisReport,
    },
    error::{StencilError, StencilResult},
};

/// Information about a project kind for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInfo {
    pub kind: ProjectKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// `builders` or `registry`.
    pub composition: &'static str,
    pub concerns: Vec<ConfigKey>,
}

/// What to generate and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub kind: ProjectKind,
    pub options: ProfileOptions,
    pub output: PathBuf,
    /// Write into an existing directory instead of failing.
    pub overwrite: bool,
}

impl SynthesisRequest {
    pub fn new(kind: ProjectKind, name: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            options: ProfileOptions::new(name),
            output: output.into(),
            overwrite: false,
        }
    }

    /// Replace the profile options. The project name comes from `options`.
    pub fn with_options(mut self, options: ProfileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn name(&self) -> &str {
        &self.options.metadata.name
    }
}

/// Result of a plan or a write.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOutcome {
    pub structure: ProjectStructure,
    pub report: SynthesisReport,
    /// False for a dry run.
    pub written: bool,
}

/// Main synthesis service.
pub struct SynthesisService {
    filesystem: Box<dyn Filesystem>,
}

impl SynthesisService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Produce the project in memory without writing anything.
    #[instrument(skip_all, fields(kind = %request.kind, project = %request.name()))]
    pub fn plan(&self, request: &SynthesisRequest) -> StencilResult<SynthesisOutcome> {
        validator::validate_project_name(request.name()).map_err(StencilError::Domain)?;

        let synthesis = ProjectProfile::new(request.kind, request.options.clone())
            .synthesize(&request.output)?;
        debug!(files = synthesis.structure.file_count(), "Planned project");

        Ok(SynthesisOutcome {
            structure: synthesis.structure,
            report: synthesis.report,
            written: false,
        })
    }

    /// Generate the project and write it to `request.output`.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind,
            project = %request.name(),
            output_path = %request.output.display()
        )
    )]
    pub fn synthesize(&self, request: &SynthesisRequest) -> StencilResult<SynthesisOutcome> {
        info!("Synthesizing {} project", request.kind.display_name());

        let mut outcome = self.plan(request)?;
        self.write_structure(&outcome.structure, request.overwrite)?;
        outcome.written = true;

        info!("Synthesis completed successfully");
        Ok(outcome)
    }

    /// List every project kind with the concerns it composes.
    pub fn list_profiles(&self) -> Vec<ProfileInfo> {
        ProjectKind::ALL
            .into_iter()
            .map(|kind| ProfileInfo {
                kind,
                id: kind.as_str(),
                name: kind.display_name(),
                description: kind.description(),
                composition: if kind.uses_config_registry() {
                    "registry"
                } else {
                    "builders"
                },
                concerns: ProjectProfile::concerns(kind).to_vec(),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    ///
    /// Only a directory this call created is removed on rollback.
    fn write_structure(&self, structure: &ProjectStructure, overwrite: bool) -> StencilResult<()> {
        let root = structure.root();
        let existed = self.filesystem.exists(root);
        if existed && !overwrite {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!(files = structure.file_count(), "Successfully wrote all files");
                Ok(())
            }
            Err(e) if existed => {
                warn!(error = %e, "Write failed inside an existing directory, leaving it in place");
                Err(e)
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> StencilResult<()> {
        let root = structure.root();
        self.filesystem.create_dir_all(root)?;

        for dir in structure.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        for file in structure.files() {
            let path = root.join(&file.path);
            self.filesystem.write_file(&path, &file.content)?;

            if file.permissions.executable_flag() {
                self.filesystem.set_permissions(&path, true)?;
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::domain::DomainError;

    fn request() -> SynthesisRequest {
        SynthesisRequest::new(ProjectKind::GitHubAction, "my-action", "out/my-action")
    }

    #[test]
    fn plan_does_not_touch_the_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_write_file().never();

        let outcome = SynthesisService::new(Box::new(fs)).plan(&request()).unwrap();

        assert!(!outcome.written);
        assert!(outcome.structure.file("action.yml").is_some());
    }

    #[test]
    fn invalid_names_are_rejected_before_synthesis() {
        let service = SynthesisService::new(Box::new(MockFilesystem::new()));
        let request = SynthesisRequest::new(ProjectKind::Service, "Bad Name", "out");

        assert!(matches!(
            service.plan(&request),
            Err(StencilError::Domain(DomainError::InvalidProjectName { .. }))
        ));
    }

    #[test]
    fn existing_directory_is_refused_without_overwrite() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();

        let result = SynthesisService::new(Box::new(fs)).synthesize(&request());

        assert!(matches!(
            result,
            Err(StencilError::Application(ApplicationError::ProjectExists { .. }))
        ));
    }

    #[test]
    fn failed_write_rolls_back_new_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|path| path == Path::new("out/my-action"))
            .times(1)
            .returning(|_| Ok(()));

        let result = SynthesisService::new(Box::new(fs)).synthesize(&request());
        assert!(result.is_err());
    }

    #[test]
    fn failed_overwrite_keeps_existing_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all().never();

        let result = SynthesisService::new(Box::new(fs)).synthesize(&request().overwrite(true));
        assert!(result.is_err());
    }

    #[test]
    fn hooks_are_made_executable() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .withf(|path, executable| path.starts_with("out/my-action/.husky") && *executable)
            .times(2)
            .returning(|_, _| Ok(()));

        let outcome = SynthesisService::new(Box::new(fs))
            .synthesize(&request())
            .unwrap();
        assert!(outcome.written);
    }

    #[test]
    fn lists_every_kind() {
        let profiles = SynthesisService::new(Box::new(MockFilesystem::new())).list_profiles();

        assert_eq!(profiles.len(), ProjectKind::ALL.len());
        assert_eq!(profiles[0].composition, "builders");
        assert!(profiles[1].concerns.contains(&ConfigKey::EsLint));
    }
}
