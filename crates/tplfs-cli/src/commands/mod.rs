//! Command handlers.
//!
//! Each handler translates parsed arguments into loader calls and prints the
//! result. Lookup rules live in `tplfs-core`.

use std::sync::Arc;

use tracing::debug;

use tplfs_adapters::LocalFilesystem;
use tplfs_core::application::TemplateSourceLoader;

use crate::config::AppConfig;

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod lookup;
pub mod render;

/// Local filesystem at `loader.root`, as configured.
pub(crate) fn filesystem(config: &AppConfig) -> LocalFilesystem {
    LocalFilesystem::new(&config.loader.root)
}

/// Loader over the configured root, prefix, and empty-source policy.
pub(crate) fn build_loader(config: &AppConfig) -> TemplateSourceLoader {
    debug!(
        root = %config.loader.root.display(),
        prefix = %config.loader.prefix,
        allow_empty = config.loader.allow_empty,
        "building loader"
    );
    TemplateSourceLoader::with_prefix(
        Arc::new(filesystem(config)),
        config.loader.prefix.as_str(),
    )
    .allow_empty_sources(config.loader.allow_empty)
}
