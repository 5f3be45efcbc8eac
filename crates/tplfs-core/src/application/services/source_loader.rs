//! Template Source Loader - name-based lookups over a `Filesystem` port.
//!
//! The loader is the bridge between a template engine (which thinks in
//! logical names) and a storage backend (which thinks in paths):
//! 1. Resolve the name against the configured prefix
//! 2. Check the entry exists and is not a directory
//! 3. Read content, derive cache keys, or compare timestamps
//!
//! It implements the driving port [`TemplateSourceProvider`] and uses the
//! driven port [`Filesystem`].

use std::fmt;
use std::sync::Arc;

use tracing::{instrument, trace};

use crate::{
    application::ports::{Filesystem, TemplateSourceProvider},
    domain::{DomainError, DomainValidator as validator, FileEntry, PathPrefix, ResolvedPath, Source},
    error::TplfsResult,
};

/// Loads template sources from a [`Filesystem`] under an optional prefix.
///
/// All state is fixed at construction, so one loader can serve concurrent
/// lookups. Cloning is cheap and shares the filesystem handle.
#[derive(Clone)]
pub struct TemplateSourceLoader {
    filesystem: Arc<dyn Filesystem>,
    prefix: PathPrefix,
    allow_empty: bool,
}

impl TemplateSourceLoader {
    /// Create a loader that looks names up verbatim.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use tplfs_core::application::{TemplateSourceLoader, TemplateSourceProvider, ports::Filesystem};
    ///
    /// # fn demo(fs: Arc<dyn Filesystem>) -> tplfs_core::error::TplfsResult<()> {
    /// let loader = TemplateSourceLoader::with_prefix(fs, "templates");
    /// let source = loader.get_source("mail/welcome.twig")?;
    /// assert_eq!(source.name(), "mail/welcome.twig");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self::with_prefix(filesystem, PathPrefix::default())
    }

    /// Create a loader that resolves every name below `prefix`.
    pub fn with_prefix(filesystem: Arc<dyn Filesystem>, prefix: impl Into<PathPrefix>) -> Self {
        Self {
            filesystem,
            prefix: prefix.into(),
            allow_empty: false,
        }
    }

    /// Accept templates whose content is empty.
    ///
    /// Off by default: an empty read is reported as
    /// [`DomainError::EmptySource`], in the not-found class.
    pub fn allow_empty_sources(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn prefix(&self) -> &PathPrefix {
        &self.prefix
    }

    pub fn allows_empty_sources(&self) -> bool {
        self.allow_empty
    }

    /// Storage path for `name`.
    pub fn resolve(&self, name: &str) -> ResolvedPath {
        self.prefix.resolve(name)
    }

    /// Entry for `name`, provided it exists and is not a directory.
    ///
    /// Shared precondition of [`TemplateSourceProvider::get_source`],
    /// [`TemplateSourceProvider::get_cache_key`] and
    /// [`TemplateSourceProvider::is_fresh`].
    ///
    /// # Errors
    ///
    /// - [`DomainError::TemplateNotFound`] if the backend has no entry
    /// - [`DomainError::DirectoryAsTemplate`] if the entry is a directory
    /// - backend errors from `Filesystem::get`, unchanged
    #[instrument(level = "trace", skip(self))]
    pub fn must_find(&self, name: &str) -> TplfsResult<FileEntry> {
        let path = self.resolve(name);

        if !self.filesystem.has(path.as_str()) {
            trace!(%path, "no entry");
            return Err(DomainError::TemplateNotFound {
                name: name.to_owned(),
                path: path.into_string(),
            }
            .into());
        }

        let entry = self.filesystem.get(path.as_str())?;
        Ok(validator::validate_template_entry(name, &path, entry)?)
    }
}

impl TemplateSourceProvider for TemplateSourceLoader {
    #[instrument(level = "trace", skip(self))]
    fn get_source(&self, name: &str) -> TplfsResult<Source> {
        self.must_find(name)?;

        let path = self.resolve(name);
        let code = self.filesystem.read(path.as_str())?;
        trace!(%path, bytes = code.len(), "read");

        Ok(validator::validate_source(
            Source::new(code, name),
            &path,
            self.allow_empty,
        )?)
    }

    fn exists(&self, name: &str) -> bool {
        self.filesystem.has(self.resolve(name).as_str())
    }

    fn get_cache_key(&self, name: &str) -> TplfsResult<String> {
        self.must_find(name)?;
        Ok(name.to_owned())
    }

    #[instrument(level = "trace", skip(self))]
    fn is_fresh(&self, name: &str, time: i64) -> TplfsResult<bool> {
        let entry = self.must_find(name)?;
        Ok(entry.is_fresh_at(time))
    }
}

impl fmt::Debug for TemplateSourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateSourceLoader")
            .field("prefix", &self.prefix)
            .field("allow_empty", &self.allow_empty)
            .finish_non_exhaustive()
    }
}
