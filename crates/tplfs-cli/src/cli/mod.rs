//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tplfs",
    bin_name = "tplfs",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Load, check, and render templates through a filesystem adapter",
    long_about = "tplfs resolves template names against a root directory and \
                  optional prefix, and answers the questions a template engine \
                  asks: does it exist, what is its source, what is its cache \
                  key, and is a cached copy still fresh.",
    after_help = "EXAMPLES:\n\
        \x20 tplfs --root ./site --prefix templates show mail/welcome.twig\n\
        \x20 tplfs fresh mail/welcome.twig 1700000000\n\
        \x20 tplfs render page.twig --var title=Home\n\
        \x20 tplfs completions bash > /usr/share/bash-completion/completions/tplfs",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a template's source.
    #[command(
        visible_alias = "cat",
        about = "Print template source",
        after_help = "EXAMPLES:\n\
            \x20 tplfs show test/Object.twig\n\
            \x20 tplfs --output-format json show test/Object.twig"
    )]
    Show(NameArgs),

    /// Check whether a template name resolves to an entry.
    #[command(about = "Check whether a template exists")]
    Exists(NameArgs),

    /// Print the cache key for a template.
    #[command(about = "Print a template's cache key")]
    CacheKey(NameArgs),

    /// Check whether a cached artifact is still fresh.
    #[command(
        about = "Check template freshness against a timestamp",
        after_help = "EXAMPLES:\n\
            \x20 tplfs fresh page.twig 1700000000\n\
            \x20 tplfs fresh page.twig 2024-01-01T00:00:00Z"
    )]
    Fresh(FreshArgs),

    /// Show resolution details and metadata for a template.
    #[command(about = "Show template metadata")]
    Stat(NameArgs),

    /// Render a template with MiniJinja.
    #[command(
        about = "Render a template",
        after_help = "EXAMPLES:\n\
            \x20 tplfs render hello.twig --var name=World\n\
            \x20 tplfs render page.twig --context ctx.json --var title=Override"
    )]
    Render(RenderArgs),

    /// List templates below the prefix.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 tplfs list\n\
            \x20 tplfs --prefix mail list --format json"
    )]
    List(ListArgs),

    /// Initialise a tplfs configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tplfs init           # global config\n\
            \x20 tplfs init --local   # .tplfs.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tplfs completions bash > ~/.local/share/bash-completion/completions/tplfs\n\
            \x20 tplfs completions zsh  > ~/.zfunc/_tplfs\n\
            \x20 tplfs completions fish > ~/.config/fish/completions/tplfs.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the tplfs configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tplfs config get loader.prefix\n\
            \x20 tplfs config set loader.prefix templates\n\
            \x20 tplfs config list"
    )]
    Config(ConfigCommands),
}

// ── template lookups ──────────────────────────────────────────────────────────

/// A single template name.
#[derive(Debug, Args)]
pub struct NameArgs {
    /// Logical template name, resolved below the prefix.
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: String,
}

/// Arguments for `tplfs fresh`.
#[derive(Debug, Args)]
pub struct FreshArgs {
    /// Logical template name.
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: String,

    /// When the cached artifact was produced.
    #[arg(
        value_name = "TIME",
        value_parser = parse_timestamp,
        allow_hyphen_values = true,
        help = "Unix seconds (fractions truncate) or RFC 3339 date-time"
    )]
    pub time: i64,
}

/// Arguments for `tplfs render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Logical template name.
    #[arg(value_name = "NAME", help = "Template name")]
    pub name: String,

    /// Context variable; repeatable. Overrides keys from `--context`.
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        value_parser = parse_var,
        help = "Set a context variable"
    )]
    pub vars: Vec<(String, String)>,

    /// JSON object file used as the base context.
    #[arg(
        long = "context",
        value_name = "FILE",
        help = "JSON file with context values"
    )]
    pub context: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `tplfs list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Name and cache key under a header.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tplfs init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.tplfs.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tplfs completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tplfs config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `loader.prefix`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value parsers ─────────────────────────────────────────────────────────────

/// Integer seconds, a decimal truncated toward zero, or an RFC 3339 date-time.
pub fn parse_timestamp(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<i64>() {
        return Ok(secs);
    }
    if let Ok(secs) = raw.parse::<f64>() {
        if secs.is_finite() {
            return Ok(secs.trunc() as i64);
        }
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.timestamp())
        .map_err(|_| format!("'{raw}' is not a Unix timestamp or RFC 3339 date-time"))
}

/// `KEY=VALUE`, splitting on the first `=`.
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("'{raw}' must look like KEY=VALUE")),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn timestamps_accept_integers() {
        assert_eq!(parse_timestamp("1234"), Ok(1234));
        assert_eq!(parse_timestamp("-5"), Ok(-5));
    }

    #[test]
    fn timestamps_truncate_fractions() {
        assert_eq!(parse_timestamp("1233.9"), Ok(1233));
        assert_eq!(parse_timestamp("-1.5"), Ok(-1));
    }

    #[test]
    fn timestamps_accept_rfc3339() {
        assert_eq!(parse_timestamp("1970-01-01T00:20:34Z"), Ok(1234));
        assert_eq!(parse_timestamp("1970-01-01T01:20:34+01:00"), Ok(1234));
    }

    #[test]
    fn timestamps_reject_garbage() {
        assert!(parse_timestamp("soon").is_err());
        assert!(parse_timestamp("NaN").is_err());
    }

    #[test]
    fn vars_split_on_first_equals() {
        assert_eq!(
            parse_var("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_var("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn parse_fresh_command() {
        let cli = Cli::parse_from(["tplfs", "fresh", "test/Object.twig", "1234"]);
        match cli.command {
            Commands::Fresh(args) => {
                assert_eq!(args.name, "test/Object.twig");
                assert_eq!(args.time, 1234);
            }
            other => panic!("expected Fresh command, got {other:?}"),
        }
    }

    #[test]
    fn global_loader_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "tplfs",
            "show",
            "a.twig",
            "--root",
            "/srv",
            "--prefix",
            "templates",
            "--allow-empty",
        ]);
        assert_eq!(cli.global.root, Some(PathBuf::from("/srv")));
        assert_eq!(cli.global.prefix.as_deref(), Some("templates"));
        assert!(cli.global.allow_empty);
    }

    #[test]
    fn render_collects_vars() {
        let cli = Cli::parse_from([
            "tplfs", "render", "p.twig", "--var", "a=1", "--var", "b=2",
        ]);
        if let Commands::Render(args) = cli.command {
            assert_eq!(args.vars.len(), 2);
            assert_eq!(args.vars[1], ("b".to_string(), "2".to_string()));
        } else {
            panic!("expected Render command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["tplfs", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
