//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STENCIL__DEFAULTS__KIND=service`
//! 3. `.stencil.toml` in the current directory
//! 4. The user config file (or the file passed with `--config`)
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stencil_core::domain::{ConfigKey, ProjectKind};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
};

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG: &str = ".stencil.toml";

const ENV_PREFIX: &str = "STENCIL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub kind: String,
    pub license: Option<String>,
    pub repository: Option<String>,
    pub framework_enabled: bool,
    pub disabled: Vec<String>,
    pub tracked: Vec<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            kind: ProjectKind::GitHubAction.as_str().to_string(),
            license: None,
            repository: None,
            framework_enabled: true,
            disabled: Vec::new(),
            tracked: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Auto,
        }
    }
}

impl AppConfig {
    /// Load configuration, layering files and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading explicit config file");
                builder = builder.add_source(toml_file(path).required(true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::config_path()).required(false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG)).required(false));
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("defaults.disabled")
                    .with_list_parse_key("defaults.tracked"),
            )
            .build()?
            .try_deserialize::<Self>()?;

        Ok(config)
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stencil.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
    }

    /// The configured default project kind.
    pub fn default_kind(&self) -> CliResult<ProjectKind> {
        self.defaults
            .kind
            .parse()
            .map_err(|e| invalid_value("defaults.kind", e))
    }

    pub fn disabled_concerns(&self) -> CliResult<Vec<ConfigKey>> {
        parse_concerns("defaults.disabled", &self.defaults.disabled)
    }

    pub fn tracked_concerns(&self) -> CliResult<Vec<ConfigKey>> {
        parse_concerns("defaults.tracked", &self.defaults.tracked)
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

fn parse_concerns(key: &str, values: &[String]) -> CliResult<Vec<ConfigKey>> {
    values
        .iter()
        .map(|value| value.parse().map_err(|e| invalid_value(key, e)))
        .collect()
}

fn invalid_value(key: &str, source: stencil_core::domain::DomainError) -> CliError {
    CliError::ConfigError {
        message: format!("Invalid value for '{key}': {source}"),
        source: Some(Box::new(source)),
    }
}
