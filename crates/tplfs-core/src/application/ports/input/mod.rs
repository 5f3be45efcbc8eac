//! Driving (input) ports - implemented by the application, called by engines.

use crate::domain::Source;
use crate::error::TplfsResult;

/// Port a template engine uses to fetch template sources by logical name.
///
/// Implemented by:
/// - `tplfs_core::application::TemplateSourceLoader`
///
/// Callers should treat any not-found class error as fatal for the current
/// render attempt; implementations do no fallback search.
pub trait TemplateSourceProvider: Send + Sync {
    /// Load the source for `name`.
    fn get_source(&self, name: &str) -> TplfsResult<Source>;

    /// Whether a source exists for `name`. Never fails.
    fn exists(&self, name: &str) -> bool;

    /// Key under which a compiled form of `name` may be cached.
    fn get_cache_key(&self, name: &str) -> TplfsResult<String>;

    /// Whether an artifact compiled at `time` (Unix seconds) is still valid.
    fn is_fresh(&self, name: &str, time: i64) -> TplfsResult<bool>;
}
