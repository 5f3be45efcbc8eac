//! `tplfs config`: read and write configuration values.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
#[instrument(skip_all)]
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&display_value(&value))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = active_config_path(global);
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.data(&to_toml(&config)?)?;
            }
        }

        ConfigCommands::Path => {
            output.data(&active_config_path(global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn active_config_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn to_toml<T: serde::Serialize>(value: &T) -> CliResult<String> {
    toml::to_string_pretty(value).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn as_table(config: &AppConfig) -> CliResult<toml::Table> {
    toml::Table::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look up a dotted key such as `loader.prefix`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<toml::Value> {
    let table = as_table(config)?;
    lookup(&table, key)
        .cloned()
        .ok_or_else(|| CliError::config(format!("Unknown config key: '{key}'")))
}

fn lookup<'a>(table: &'a toml::Table, key: &str) -> Option<&'a toml::Value> {
    let (section, field) = key.split_once('.')?;
    table.get(section)?.as_table()?.get(field)
}

fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write `key = raw` into the TOML file at `path`, creating it if needed.
///
/// Keys are limited to those [`AppConfig`] knows; the value is parsed to the
/// key's type and the resulting file must still load.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let template = get_config_value(&AppConfig::default(), key)?;
    let value = match template {
        toml::Value::Boolean(_) => raw.parse::<bool>().map(toml::Value::Boolean).map_err(|_| {
            CliError::InvalidInput {
                message: format!("'{key}' expects true or false, got '{raw}'"),
                source: None,
            }
        })?,
        _ => toml::Value::String(raw.to_owned()),
    };

    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&text).map_err(|e| CliError::ConfigError {
            message: format!("'{}' is not valid TOML", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let (section, field) = key
        .split_once('.')
        .ok_or_else(|| CliError::config(format!("Unknown config key: '{key}'")))?;
    let section = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(section) = section.as_table_mut() else {
        return Err(CliError::config(format!(
            "'{}' has a non-table value where a section was expected",
            path.display()
        )));
    };
    section.insert(field.to_owned(), value);

    toml::Value::Table(table.clone())
        .try_into::<AppConfig>()
        .map_err(|e| CliError::ConfigError {
            message: format!("Setting '{key}' would leave an unreadable config"),
            source: Some(Box::new(e)),
        })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, to_toml(&table)?)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    debug!(path = %path.display(), key, "config updated");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
