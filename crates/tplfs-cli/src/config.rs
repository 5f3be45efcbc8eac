//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it, it only receives a
//! filesystem and a prefix.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--prefix`, `--allow-empty`, `--no-color`)
//! 2. Environment variables (`TPLFS_LOADER__PREFIX`, ...)
//! 3. Config file (`--config FILE`, else the platform default if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::global::GlobalArgs;

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "TPLFS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How template names map onto the filesystem.
    pub loader: LoaderConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Root directory of the local filesystem.
    pub root: PathBuf,
    /// Prefix prepended to every template name. Empty means none.
    pub prefix: String,
    /// Accept templates with empty content.
    pub allow_empty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            prefix: String::new(),
            allow_empty: false,
        }
    }
}

/// `TPLFS_LOADER__PREFIX` → `loader.prefix`.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist when `require_explicit` is set;
    /// commands that create the file pass `false`. The default location is
    /// always optional.
    pub fn load(config_file: Option<&PathBuf>, require_explicit: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), require_explicit),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, environment())
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env.try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Apply CLI flag overrides on top of the loaded values.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(root) = &args.root {
            self.loader.root = root.clone();
        }
        if let Some(prefix) = &args.prefix {
            self.loader.prefix = prefix.clone();
        }
        if args.allow_empty {
            self.loader.allow_empty = true;
        }
        if args.no_color {
            self.output.no_color = true;
        }
        self
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tplfs.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tplfs", "tplfs")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| Self::local_config_path())
    }

    /// Path of a project-local configuration file.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".tplfs.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn empty_env() -> Environment {
        environment().source(Some(HashMap::new()))
    }

    fn args() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
            root: None,
            prefix: None,
            allow_empty: false,
        }
    }

    #[test]
    fn defaults_have_no_prefix() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.loader.prefix, "");
        assert_eq!(cfg.loader.root, PathBuf::from("."));
        assert!(!cfg.loader.allow_empty);
    }

    #[test]
    fn missing_optional_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("none.toml"), false, empty_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("none.toml"), true, empty_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[loader]\nprefix = \"templates\"\nallow_empty = true\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, empty_env()).unwrap();
        assert_eq!(cfg.loader.prefix, "templates");
        assert!(cfg.loader.allow_empty);
        // untouched keys keep their defaults
        assert_eq!(cfg.loader.root, PathBuf::from("."));
    }

    #[test]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[loader]\nprefix = \"from-file\"\n").unwrap();

        let env = environment().source(Some(HashMap::from([(
                "TPLFS_LOADER__PREFIX".to_string(),
                "from-env".to_string(),
            )])));

        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.loader.prefix, "from-env");
    }

    #[test]
    fn flags_override_everything() {
        let mut args = args();
        args.root = Some(PathBuf::from("/srv/site"));
        args.prefix = Some("views".into());
        args.allow_empty = true;

        let cfg = AppConfig::default().with_overrides(&args);
        assert_eq!(cfg.loader.root, PathBuf::from("/srv/site"));
        assert_eq!(cfg.loader.prefix, "views");
        assert!(cfg.loader.allow_empty);
    }

    #[test]
    fn absent_flags_keep_loaded_values() {
        let mut cfg = AppConfig::default();
        cfg.loader.prefix = "kept".into();
        assert_eq!(cfg.clone().with_overrides(&args()), cfg);
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
