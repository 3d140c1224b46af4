use serde_json::json;

use super::Builder;
use crate::domain::{error::DomainResult, synthesis::{Project, SCAFFOLD_SCRIPTS}};

const FILES: [&str; 3] = ["lib", "README.md", "LICENSE"];
const DEV_DEPENDENCIES: [&str; 2] = ["ts-node@^10.9.2", "@types/node@^20.9.3"];
const KEEP: &str = "build";
const GENERATED: [&str; 2] = ["/package.json", "/package-lock.json"];

/// Trims the scaffold down to what an action repository ships.
#[derive(Debug, Default)]
pub struct NpmPackageBuilder;

impl Builder for NpmPackageBuilder {
    fn name(&self) -> &'static str {
        "npm-package"
    }

    fn add_templates(&self, project: &mut Project) -> DomainResult<()> {
        project.manifest_mut().add_field("files", json!(FILES));
        Ok(())
    }

    fn add_scripts(&self, project: &mut Project) {
        let manifest = project.manifest_mut();
        for task in SCAFFOLD_SCRIPTS.iter().filter(|t| **t != KEEP) {
            manifest.remove_script(task);
        }
    }

    fn add_dev_dependencies(&self, project: &mut Project) -> DomainResult<()> {
        project.add_dev_dependencies(&DEV_DEPENDENCIES)
    }

    fn generated_patterns(&self) -> Vec<String> {
        GENERATED.iter().map(|p| (*p).to_string()).collect()
    }
}
