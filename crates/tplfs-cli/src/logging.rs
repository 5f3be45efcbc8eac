//! Tracing subscriber initialisation.
//!
//! Only the CLI calls [`init_logging`]. `tplfs-adapters` emits DEBUG events
//! for backend work (refused paths, listings, renders). `tplfs-core` emits
//! nothing above TRACE: its loader spans (`must_find`, `get_source`,
//! `is_fresh`) are enabled only at `-vvv`, where each span also reports its
//! duration when it closes.
//!
//! | Flag(s)   | `tplfs`, `tplfs_adapters` | `tplfs_core` |
//! |-----------|---------------------------|--------------|
//! | `--quiet` | ERROR                     | off          |
//! | (none)    | WARN                      | off          |
//! | `-v`      | INFO                      | off          |
//! | `-vv`     | DEBUG                     | off          |
//! | `-vvv`    | TRACE                     | TRACE        |
//!
//! `TPLFS_LOG`, then `RUST_LOG`, replaces the table when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Environment variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "TPLFS_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    Quiet,
    Normal,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Quiet;
        }
        match args.verbose {
            0 => Self::Normal,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Filter directives for our three crates.
    fn directives(self) -> String {
        let level = self.level();
        let core = if self == Self::Trace { "trace" } else { "off" };
        format!("tplfs={level},tplfs_adapters={level},tplfs_core={core}")
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Fails if a subscriber is already registered in this process.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);
    let tracing_lookups = verbosity == Verbosity::Trace;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let span_events = if tracing_lookups {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(tracing_lookups)
        .with_span_events(span_events)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}
