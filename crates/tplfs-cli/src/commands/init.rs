//! `tplfs init`: create a default configuration file.

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default tplfs configuration file.
///
/// Writes to `--config` if given, else `.tplfs.toml` with `--local`, else
/// the platform path.
#[instrument(skip_all, fields(local = args.local))]
pub fn execute(args: InitArgs, global: &GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = target_path(&args, global);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_default(&config_path)?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn target_path(args: &InitArgs, global: &GlobalArgs) -> PathBuf {
    match &global.config {
        Some(path) => path.clone(),
        None if args.local => AppConfig::local_config_path(),
        None => AppConfig::config_path(),
    }
}

fn write_default(config_path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))
}
