//! Application layer errors.
//!
//! These errors represent failures in the collaborators the loader talks to,
//! not lookup rules. Lookup failures are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to backends or engines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A filesystem backend failed (I/O, permissions, missing after `has`).
    #[error("Filesystem error at '{path}': {reason}")]
    Backend { path: String, reason: String },

    /// Backend state lock was poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,

    /// The template engine rejected or failed to render a template.
    #[error("Rendering '{name}' failed: {reason}")]
    RenderingFailed { name: String, reason: String },
}

impl ApplicationError {
    /// Convenience constructor used by backends.
    pub fn backend(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Backend {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Backend { path, .. } => vec![
                format!("Failed to access: {}", path),
                "Check that you have read permissions".into(),
            ],
            Self::StoreLockError => vec![
                "The in-memory filesystem is in an inconsistent state".into(),
                "A writer panicked while holding the lock".into(),
            ],
            Self::RenderingFailed { name, .. } => vec![
                format!("Check the syntax of '{}'", name),
                "Included or extended templates must also be loadable".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Backend { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
        }
    }
}
