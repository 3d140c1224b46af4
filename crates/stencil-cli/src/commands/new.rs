//! Implementation of the `stencil new` command.
//!
//! Responsibility: merge CLI arguments with configured defaults into a
//! `SynthesisRequest`, call the core synthesis service, and display results.
//! No business logic lives here.

use std::io::IsTerminal as _;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use stencil_adapters::LocalFilesystem;
use stencil_core::{
    application::{SynthesisOutcome, SynthesisRequest, SynthesisService},
    domain::{ConcernReport, ConfigKey, ProfileOptions, ProjectKind},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

const LABEL_WIDTH: usize = 12;

/// Execute the `stencil new` command.
///
/// 1. Resolve kind, options and target directory
/// 2. Refuse or confirm an existing directory
/// 3. Plan only (`--dry-run`) or synthesize and write
/// 4. Print the summary
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let kind = match args.kind {
        Some(kind) => kind.into(),
        None => config.default_kind()?,
    };
    let options = build_options(&args, &config)?;
    let project_dir = args.path.join(directory_name(&args.name));

    debug!(
        kind = %kind,
        path = %project_dir.display(),
        disabled = ?options.disabled,
        tracked = ?options.tracked,
        "Request resolved"
    );

    let request = SynthesisRequest::new(kind, args.name.clone(), &project_dir)
        .with_options(options)
        .overwrite(args.force);
    let service = SynthesisService::new(Box::new(LocalFilesystem::new()));

    if args.dry_run {
        let outcome = service.plan(&request)?;
        return render(&output, &request, &outcome);
    }

    if project_dir.exists() {
        if !args.force {
            return Err(CliError::ProjectExists { path: project_dir });
        }
        if !args.yes && !global.quiet && !confirm_overwrite(&project_dir)? {
            return Err(CliError::Cancelled);
        }
    }

    let spinner = output.spinner(&format!("Synthesizing {}...", kind.display_name()));
    let result = service.synthesize(&request);
    spinner.finish_and_clear();
    let outcome = result?;

    info!(files = outcome.structure.file_count(), "Project written");
    render(&output, &request, &outcome)?;

    if !output.is_json() && !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project_dir.display()))?;
        output.print("  npm install")?;
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

/// Merge configured defaults with command-line flags. Flags win for scalar
/// values; concern lists are combined.
fn build_options(args: &NewArgs, config: &AppConfig) -> CliResult<ProfileOptions> {
    let mut options = ProfileOptions::new(args.name.clone())
        .framework_enabled(config.defaults.framework_enabled && !args.no_framework);

    if let Some(description) = &args.description {
        options = options.description(description.clone());
    }
    if let Some(license) = args.license.as_ref().or(config.defaults.license.as_ref()) {
        options = options.license(license.clone());
    }
    if let Some(url) = args.repository.as_ref().or(config.defaults.repository.as_ref()) {
        options = options.repository(url.clone());
    }

    let disabled = config
        .disabled_concerns()?
        .into_iter()
        .chain(args.disable.iter().copied().map(ConfigKey::from));
    for key in disabled {
        options = options.disable(key);
    }

    let tracked = config
        .tracked_concerns()?
        .into_iter()
        .chain(args.track.iter().copied().map(ConfigKey::from));
    for key in tracked {
        options = options.track(key);
    }

    Ok(options)
}

/// Directory for a package name: the part after the scope, if any.
fn directory_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary<'a> {
    name: &'a str,
    kind: ProjectKind,
    path: &'a Path,
    written: bool,
    files: Vec<String>,
    concerns: &'a [ConcernReport],
    tracked: Vec<TrackedSummary>,
}

#[derive(Serialize)]
struct TrackedSummary {
    concern: ConfigKey,
    files: Vec<String>,
    scripts: Vec<String>,
    dependencies: Vec<String>,
}

impl<'a> Summary<'a> {
    fn new(request: &'a SynthesisRequest, outcome: &'a SynthesisOutcome) -> Self {
        Self {
            name: request.name(),
            kind: request.kind,
            path: &request.output,
            written: outcome.written,
            files: outcome
                .structure
                .files()
                .map(|f| f.path.display().to_string())
                .collect(),
            concerns: &outcome.report.concerns,
            tracked: outcome
                .report
                .tracked
                .iter()
                .map(|t| TrackedSummary {
                    concern: t.concern,
                    files: t.files.iter().map(ToString::to_string).collect(),
                    scripts: t.scripts.clone(),
                    dependencies: t.dependencies.clone(),
                })
                .collect(),
        }
    }
}

fn render(
    output: &OutputManager,
    request: &SynthesisRequest,
    outcome: &SynthesisOutcome,
) -> CliResult<()> {
    let summary = Summary::new(request, outcome);
    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    if summary.written {
        output.success(&format!(
            "Created '{}' ({})",
            summary.name,
            summary.kind.display_name()
        ))?;
    } else {
        output.info(&format!(
            "Dry run: would create '{}' ({})",
            summary.name,
            summary.kind.display_name()
        ))?;
    }

    output.field("Location", &summary.path.display().to_string(), LABEL_WIDTH)?;
    output.field("Files", &summary.files.len().to_string(), LABEL_WIDTH)?;

    output.print("")?;
    output.header("Concerns")?;
    for report in summary.concerns {
        output.field(report.concern.as_str(), report.mode.as_str(), LABEL_WIDTH)?;
    }

    if !summary.tracked.is_empty() {
        output.print("")?;
        output.header("Tracked (not written)")?;
        for tracked in &summary.tracked {
            output.field(tracked.concern.as_str(), &tracked.files.join(", "), LABEL_WIDTH)?;
        }
    }

    if !summary.written {
        output.print("")?;
        output.header("Files")?;
        for file in &summary.files {
            output.print(&format!("  {file}"))?;
        }
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "refusing to regenerate into an existing directory without --yes".into(),
            source: None,
        });
    }

    dialoguer::Confirm::new()
        .with_prompt(format!(
            "Regenerate into existing directory {}?",
            path.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "could not read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &Path) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "refusing to regenerate into an existing directory without --yes".into(),
            source: None,
        });
    }
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
