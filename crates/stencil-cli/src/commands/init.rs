//! `stencil init`: create a default configuration file.

use std::path::PathBuf;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::{AppConfig, LOCAL_CONFIG},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default Stencil configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG)
    } else {
        AppConfig::config_path()
    };

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }

    std::fs::write(&config_path, default_file(&AppConfig::default()))
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Configuration created");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// The commented TOML written by `init`.
pub(crate) fn default_file(config: &AppConfig) -> String {
    let defaults = &config.defaults;
    let list = |items: &[String]| {
        let quoted: Vec<String> = items.iter().map(|i| format!("{i:?}")).collect();
        format!("[{}]", quoted.join(", "))
    };
    let optional = |key: &str, value: &Option<String>, example: &str| match value {
        Some(value) => format!("{key} = {value:?}"),
        None => format!("# {key} = {example:?}"),
    };

    [
        "# Stencil configuration.".to_string(),
        "# Environment variables override this file, e.g. STENCIL__DEFAULTS__KIND=service".into(),
        String::new(),
        "[defaults]".into(),
        "# github-action, service or library".into(),
        format!("kind = {:?}", defaults.kind),
        optional("license", &defaults.license, "MIT"),
        optional(
            "repository",
            &defaults.repository,
            "https://github.com/acme/project.git",
        ),
        "# false turns every config module off".into(),
        format!("framework_enabled = {}", defaults.framework_enabled),
        "# npm, typescript, prettier, husky, devcontainer, vscode, github, commitlint, eslint"
            .into(),
        format!("disabled = {}", list(&defaults.disabled)),
        "# tracked concerns are recorded but not written".into(),
        format!("tracked = {}", list(&defaults.tracked)),
        String::new(),
        "[output]".into(),
        format!("color = {}", config.output.color),
        "# auto, human, plain or json".into(),
        format!("format = \"{}\"", format_name(config)),
        String::new(),
    ]
    .join("\n")
}

fn format_name(config: &AppConfig) -> &'static str {
    use crate::cli::OutputFormat;
    match config.output.format {
        OutputFormat::Auto => "auto",
        OutputFormat::Human => "human",
        OutputFormat::Plain => "plain",
        OutputFormat::Json => "json",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_file_parses_back_to_defaults() {
        let text = default_file(&AppConfig::default());
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed, AppConfig::default());
        assert!(text.contains("# license = \"MIT\""));
    }

    #[test]
    fn default_file_keeps_custom_values() {
        let mut config = AppConfig::default();
        config.defaults.kind = "service".into();
        config.defaults.tracked = vec!["github".into(), "vscode".into()];
        config.defaults.license = Some("Apache-2.0".into());

        let parsed: AppConfig = toml::from_str(&default_file(&config)).unwrap();
        assert_eq!(parsed, config);
    }
}
