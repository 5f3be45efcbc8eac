//! `tplfs render`: render a template, its parents and includes with MiniJinja.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, instrument};

use tplfs_adapters::MiniJinjaRenderer;

use crate::{
    cli::RenderArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: RenderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let context = build_context(args.context.as_deref(), args.vars)?;
    debug!(keys = context.len(), "context ready");

    let renderer = MiniJinjaRenderer::new(super::build_loader(&config));
    let rendered = renderer.render(&args.name, Value::Object(context))?;

    if output.is_json() {
        output.json(&serde_json::json!({ "name": args.name, "output": rendered }))?;
    } else {
        output.raw(rendered.as_bytes())?;
    }
    Ok(())
}

/// Base context from an optional JSON object file, then `--var` pairs on top.
fn build_context(file: Option<&Path>, vars: Vec<(String, String)>) -> CliResult<Map<String, Value>> {
    let mut context = match file {
        Some(path) => read_context_file(path)?,
        None => Map::new(),
    };
    for (key, value) in vars {
        context.insert(key, Value::String(value));
    }
    Ok(context)
}

fn read_context_file(path: &Path) -> CliResult<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read context file '{}'", path.display()))?;

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CliError::ContextInvalid {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
        Err(e) => Err(CliError::ContextInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
