//! Implementation of the `stencil list` command.

use stencil_adapters::LocalFilesystem;
use stencil_core::application::{ProfileInfo, SynthesisService};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = SynthesisService::new(Box::new(LocalFilesystem::new()));
    let profiles = service.list_profiles();

    // A global `--output-format json` also asks for JSON.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available project kinds:")?;
            for profile in &profiles {
                output.print(&format!(
                    "  {:<15} {:<15} {}",
                    profile.id, profile.name, profile.description
                ))?;
                if args.concerns {
                    output.print(&format!(
                        "  {:<15} {} ({})",
                        "",
                        concern_list(profile),
                        profile.composition
                    ))?;
                }
            }
        }
        ListFormat::Json => {
            // Bypasses quiet mode: JSON must stay parseable in pipes.
            output.json(&profiles)?;
        }
        ListFormat::Plain => {
            for profile in &profiles {
                let line = if args.concerns {
                    format!("{} {}", profile.id, concern_list(profile))
                } else {
                    profile.id.to_string()
                };
                output.print(&line)?;
            }
        }
    }

    Ok(())
}

fn concern_list(profile: &ProfileInfo) -> String {
    profile
        .concerns
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::domain::{ConfigKey, ProjectKind};

    #[test]
    fn concern_list_is_comma_separated() {
        let profile = ProfileInfo {
            kind: ProjectKind::Library,
            id: "library",
            name: "Library",
            description: "",
            composition: "registry",
            concerns: vec![ConfigKey::Npm, ConfigKey::EsLint],
        };
        assert_eq!(concern_list(&profile), "npm,eslint");
    }
}
