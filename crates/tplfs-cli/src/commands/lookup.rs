//! `tplfs show | exists | cache-key | fresh | stat`: the loader's questions,
//! asked from the command line.

use chrono::DateTime;
use owo_colors::OwoColorize;
use serde_json::json;
use tracing::instrument;

use tplfs_core::application::{TemplateSourceLoader, TemplateSourceProvider};

use crate::{
    cli::{FreshArgs, NameArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Print the template source exactly as stored.
#[instrument(skip_all, fields(name = %args.name))]
pub fn show(args: NameArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let source = super::build_loader(&config).get_source(&args.name)?;

    if output.is_json() {
        output.json(&json!({
            "name": source.name(),
            "content": source.to_string_lossy(),
        }))?;
    } else {
        output.raw(source.code())?;
    }
    Ok(())
}

/// `true` or `false`; a missing template is not an error here.
#[instrument(skip_all, fields(name = %args.name))]
pub fn exists(args: NameArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let found = super::build_loader(&config).exists(&args.name);

    if output.is_json() {
        output.json(&json!({ "name": args.name, "exists": found }))?;
    } else {
        output.data(&found.to_string())?;
    }
    Ok(())
}

#[instrument(skip_all, fields(name = %args.name))]
pub fn cache_key(args: NameArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let key = super::build_loader(&config).get_cache_key(&args.name)?;

    if output.is_json() {
        output.json(&json!({ "name": args.name, "cache_key": key }))?;
    } else {
        output.data(&key)?;
    }
    Ok(())
}

/// `true` when the template was last modified at or before `time`.
#[instrument(skip_all, fields(name = %args.name, time = args.time))]
pub fn fresh(args: FreshArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let fresh = super::build_loader(&config).is_fresh(&args.name, args.time)?;

    if output.is_json() {
        output.json(&json!({ "name": args.name, "time": args.time, "fresh": fresh }))?;
    } else {
        output.data(&fresh.to_string())?;
    }
    Ok(())
}

/// Resolution details and metadata for one template.
#[instrument(skip_all, fields(name = %args.name))]
pub fn stat(args: NameArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let loader = super::build_loader(&config);
    let report = StatReport::collect(&loader, &args.name)?;

    if output.is_json() {
        output.json(&json!({
            "name": report.name,
            "path": report.path,
            "cache_key": report.cache_key,
            "last_modified": report.last_modified,
            "modified": report.modified_rfc3339(),
            "size": report.size,
        }))?;
        return Ok(());
    }

    let name = if output.supports_color() {
        report.name.bold().to_string()
    } else {
        report.name.clone()
    };
    output.field("name", &name)?;
    output.field("path", &report.path)?;
    output.field("cache key", &report.cache_key)?;
    output.field("modified", &report.modified_rfc3339())?;
    if let Some(size) = report.size {
        output.field("size", &format!("{size} bytes"))?;
    }
    Ok(())
}

#[derive(Debug)]
struct StatReport {
    name: String,
    path: String,
    cache_key: String,
    last_modified: i64,
    size: Option<u64>,
}

impl StatReport {
    fn collect(loader: &TemplateSourceLoader, name: &str) -> CliResult<Self> {
        let entry = loader.must_find(name)?;
        Ok(Self {
            name: name.to_owned(),
            path: loader.resolve(name).into_string(),
            cache_key: loader.get_cache_key(name)?,
            last_modified: entry.last_modified(),
            size: entry.size(),
        })
    }

    /// Falls back to raw seconds when the value is outside chrono's range.
    fn modified_rfc3339(&self) -> String {
        DateTime::from_timestamp(self.last_modified, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| self.last_modified.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tplfs_adapters::MemoryFilesystem;

    #[test]
    fn stat_report_resolves_below_prefix() {
        let fs = MemoryFilesystem::new();
        fs.insert_file("templates/test/Object.twig", "{{ template }}", 1234)
            .unwrap();
        let loader = TemplateSourceLoader::with_prefix(Arc::new(fs), "templates");

        let report = StatReport::collect(&loader, "test/Object.twig").unwrap();
        assert_eq!(report.path, "templates/test/Object.twig");
        assert_eq!(report.cache_key, "test/Object.twig");
        assert_eq!(report.last_modified, 1234);
        assert_eq!(report.modified_rfc3339(), "1970-01-01T00:20:34+00:00");
    }

    #[test]
    fn stat_report_fails_for_missing_template() {
        let loader = TemplateSourceLoader::new(Arc::new(MemoryFilesystem::new()));
        assert!(StatReport::collect(&loader, "nope.twig").is_err());
    }

    #[test]
    fn out_of_range_mtime_prints_seconds() {
        let report = StatReport {
            name: "a".into(),
            path: "a".into(),
            cache_key: "a".into(),
            last_modified: i64::MAX,
            size: None,
        };
        assert_eq!(report.modified_rfc3339(), i64::MAX.to_string());
    }
}
