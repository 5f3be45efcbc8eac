// ============================================================================
// domain/error.rs - TEMPLATE LOOKUP ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (engines may cache a failed lookup)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("Template could not be found on the given filesystem: '{name}'")]
    TemplateNotFound { name: String, path: String },

    #[error("Cannot use directory as template: '{name}'")]
    DirectoryAsTemplate { name: String, path: String },

    /// The backend returned no content. Reported in the not-found class so
    /// that engines treat it like a missing template.
    #[error("Template '{name}' has no content")]
    EmptySource { name: String, path: String },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Template '{name}' is not valid UTF-8")]
    InvalidEncoding { name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, path } => vec![
                format!("Looked for '{}' at '{}'", name, path),
                "Check the configured root and prefix".into(),
                "Try: tplfs list to see available templates".into(),
            ],
            Self::DirectoryAsTemplate { path, .. } => vec![
                format!("'{}' is a directory", path),
                "Name a file inside it instead".into(),
            ],
            Self::EmptySource { path, .. } => vec![
                format!("'{}' exists but is empty", path),
                "Pass --allow-empty to accept empty templates".into(),
            ],
            Self::InvalidEncoding { .. } => vec!["Re-save the template as UTF-8".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. }
            | Self::DirectoryAsTemplate { .. }
            | Self::EmptySource { .. } => ErrorCategory::NotFound,
            Self::InvalidEncoding { .. } => ErrorCategory::Validation,
        }
    }

    /// The logical template name the error refers to.
    pub fn template_name(&self) -> &str {
        match self {
            Self::TemplateNotFound { name, .. }
            | Self::DirectoryAsTemplate { name, .. }
            | Self::EmptySource { name, .. }
            | Self::InvalidEncoding { name } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_not_found_class() {
        let missing = DomainError::TemplateNotFound {
            name: "a.twig".into(),
            path: "t/a.twig".into(),
        };
        let dir = DomainError::DirectoryAsTemplate {
            name: "a".into(),
            path: "t/a".into(),
        };
        let empty = DomainError::EmptySource {
            name: "a.twig".into(),
            path: "t/a.twig".into(),
        };
        assert_eq!(missing.category(), ErrorCategory::NotFound);
        assert_eq!(dir.category(), ErrorCategory::NotFound);
        assert_eq!(empty.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn messages_identify_the_condition() {
        let dir = DomainError::DirectoryAsTemplate {
            name: "partials".into(),
            path: "templates/partials".into(),
        };
        assert!(dir.to_string().contains("Cannot use directory as template"));

        let missing = DomainError::TemplateNotFound {
            name: "x".into(),
            path: "x".into(),
        };
        assert!(missing.to_string().contains("could not be found"));
    }

    #[test]
    fn template_name_is_the_logical_name() {
        let err = DomainError::EmptySource {
            name: "mail/body.twig".into(),
            path: "templates/mail/body.twig".into(),
        };
        assert_eq!(err.template_name(), "mail/body.twig");
    }
}
