//! Unified error handling for tplfs core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for tplfs core operations.
///
/// This enum wraps all possible errors that can occur when using tplfs-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TplfsError {
    /// Errors from the domain layer (lookup rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (backend and engine failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl TplfsError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in tplfs".into(),
                "Please report this issue at: https://github.com/cosecruz/tplfs/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for missing entries, directories, and empty sources.
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    /// `true` only when nothing exists at the resolved path.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Domain(DomainError::TemplateNotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type TplfsResult<T> = Result<T, TplfsError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> TplfsResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> TplfsResult<T> {
        self.map_err(|e| TplfsError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_not_found_maps_to_not_found() {
        let err: TplfsError = DomainError::DirectoryAsTemplate {
            name: "d".into(),
            path: "d".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.is_not_found());
        assert!(!err.is_missing());
    }

    #[test]
    fn backend_errors_are_internal() {
        let err: TplfsError = ApplicationError::backend("a.twig", "permission denied").into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_not_found());
    }

    #[test]
    fn display_is_transparent_for_wrapped_errors() {
        let err: TplfsError = DomainError::TemplateNotFound {
            name: "a.twig".into(),
            path: "a.twig".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Template could not be found on the given filesystem: 'a.twig'"
        );
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result.context("formatting").unwrap_err();
        assert!(matches!(err, TplfsError::Internal { ref message } if message.starts_with("formatting")));
    }
}
