//! `stencil config`: read and write configuration values.

use std::path::Path;

use serde_json::Value as JsonValue;
use toml::{Table, Value};
use tracing::{debug, info};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = global.config.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.print(&display_value(&value))?;
            }
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            info!(key = %key, path = %path.display(), "Configuration updated");
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(serialised.trim_end())?;
            }
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `defaults.kind` in the effective config.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<JsonValue> {
    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    key.split('.')
        .try_fold(&root, |node, segment| node.get(segment))
        .cloned()
        .ok_or_else(|| unknown_key(key))
}

fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// Write `key = raw` into the TOML file at `path`, creating it when needed.
///
/// The value is typed after the default it replaces. The edited file has to
/// still load as a valid configuration before anything is written.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let template = get_config_value(&AppConfig::default(), key)?;
    let value = typed_value(&template, key, raw)?;

    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<Table>(&text)
            .with_cli_context(|| format!("Failed to parse '{}'", path.display()))?
    } else {
        Table::new()
    };

    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let section = table
        .entry(section.to_string())
        .or_insert_with(|| Value::Table(Table::new()));
    let Value::Table(section) = section else {
        return Err(CliError::ConfigError {
            message: format!("'{}' in {} is not a table", key, path.display()),
            source: None,
        });
    };
    section.insert(field.to_string(), value);

    let updated: AppConfig = Value::Table(table.clone())
        .try_into()
        .with_cli_context(|| format!("Invalid value for '{key}'"))?;
    updated.default_kind()?;
    updated.disabled_concerns()?;
    updated.tracked_concerns()?;

    let text = toml::to_string_pretty(&table).with_cli_context(|| "Failed to serialise config")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    debug!(path = %path.display(), "Wrote config file");
    Ok(())
}

fn typed_value(template: &JsonValue, key: &str, raw: &str) -> CliResult<Value> {
    match template {
        JsonValue::Bool(_) => raw
            .parse::<bool>()
            .map(Value::Boolean)
            .map_err(|e| CliError::ConfigError {
                message: format!("'{key}' expects true or false, got '{raw}'"),
                source: Some(Box::new(e)),
            }),
        JsonValue::Array(_) => Ok(Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::String(item.to_string()))
                .collect(),
        )),
        JsonValue::String(_) | JsonValue::Null => Ok(Value::String(raw.to_string())),
        JsonValue::Number(_) | JsonValue::Object(_) => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stencil_core::domain::{ConfigKey, ProjectKind};

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            display_value(&get_config_value(&cfg, "defaults.kind").unwrap()),
            "github-action"
        );
        assert_eq!(
            display_value(&get_config_value(&cfg, "output.color").unwrap()),
            "true"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_creates_file_and_types_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        set_config_value(&path, "defaults.kind", "service").unwrap();
        set_config_value(&path, "defaults.tracked", "github, vscode").unwrap();
        set_config_value(&path, "output.color", "false").unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.default_kind().unwrap(), ProjectKind::Service);
        assert_eq!(
            loaded.tracked_concerns().unwrap(),
            vec![ConfigKey::GitHub, ConfigKey::VsCode]
        );
        assert!(!loaded.output.color);
    }

    #[test]
    fn set_rejects_invalid_values_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(set_config_value(&path, "defaults.kind", "desktop").is_err());
        assert!(set_config_value(&path, "output.color", "maybe").is_err());
        assert!(set_config_value(&path, "defaults.nope", "x").is_err());
        assert!(!path.exists());
    }
}
