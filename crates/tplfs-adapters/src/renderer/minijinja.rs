//! MiniJinja bridge: templates, includes, and parents load through a
//! [`TemplateSourceLoader`].

use minijinja::{Environment, ErrorKind};
use serde::Serialize;
use tracing::{debug, instrument};

use tplfs_core::{
    application::{ApplicationError, TemplateSourceLoader, TemplateSourceProvider},
    error::{TplfsError, TplfsResult},
};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance, loading on demand
    env: Environment<'static>,
    /// Same loader the environment uses, for pre-render checks
    loader: TemplateSourceLoader,
}

impl MiniJinjaRenderer {
    /// Creates a renderer whose environment resolves every template name,
    /// including `{% include %}` and `{% extends %}` targets, through `loader`.
    pub fn new(loader: TemplateSourceLoader) -> Self {
        let mut env = Environment::new();
        let engine_loader = loader.clone();
        env.set_loader(move |name| load_for_engine(&engine_loader, name));
        Self { env, loader }
    }

    pub fn loader(&self) -> &TemplateSourceLoader {
        &self.loader
    }

    /// Render `name` with `context`.
    ///
    /// The root template is checked with `must_find` first so a missing or
    /// directory root keeps its not-found class instead of becoming a
    /// rendering failure.
    #[instrument(skip(self, context))]
    pub fn render<S: Serialize>(&self, name: &str, context: S) -> TplfsResult<String> {
        self.loader.must_find(name)?;

        let template = self
            .env
            .get_template(name)
            .map_err(|e| into_tplfs_error(name, e))?;
        let rendered = template
            .render(context)
            .map_err(|e| into_tplfs_error(name, e))?;

        debug!(bytes = rendered.len(), "rendered");
        Ok(rendered)
    }
}

/// Loader callback: `Ok(None)` tells MiniJinja the template does not exist.
fn load_for_engine(
    loader: &TemplateSourceLoader,
    name: &str,
) -> Result<Option<String>, minijinja::Error> {
    match loader.get_source(name) {
        Ok(source) => source
            .into_string()
            .map(Some)
            .map_err(|e| engine_error(e.into())),
        Err(e) if e.is_missing() => Ok(None),
        Err(e) => Err(engine_error(e)),
    }
}

fn engine_error(err: TplfsError) -> minijinja::Error {
    minijinja::Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}

/// Recover a loader error carried through the engine, or report a rendering failure.
fn into_tplfs_error(name: &str, err: minijinja::Error) -> TplfsError {
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        if let Some(found) = cause.downcast_ref::<TplfsError>() {
            return found.clone();
        }
        source = cause.source();
    }

    ApplicationError::RenderingFailed {
        name: name.to_owned(),
        reason: err.to_string(),
    }
    .into()
}
