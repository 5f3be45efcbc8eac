// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for tplfs.
//!
//! This module contains the lookup rules with no I/O. Storage access is
//! reached via the `Filesystem` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{EntryKind, FileEntry, Source};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{PathPrefix, ResolvedPath, SEPARATOR};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn path(raw: &str) -> ResolvedPath {
        PathPrefix::default().resolve(raw)
    }

    #[test]
    fn file_entries_pass_validation() {
        let entry = FileEntry::file(10);
        let validated =
            DomainValidator::validate_template_entry("a.twig", &path("a.twig"), entry).unwrap();
        assert_eq!(validated, entry);
    }

    #[test]
    fn directory_entries_fail_validation() {
        let err = DomainValidator::validate_template_entry(
            "partials",
            &PathPrefix::new("templates").resolve("partials"),
            FileEntry::directory(10),
        )
        .unwrap_err();

        assert_eq!(
            err,
            DomainError::DirectoryAsTemplate {
                name: "partials".into(),
                path: "templates/partials".into(),
            }
        );
    }

    #[test]
    fn empty_source_rejected_unless_allowed() {
        let empty = Source::new(Vec::new(), "blank.twig");

        let err = DomainValidator::validate_source(empty.clone(), &path("blank.twig"), false)
            .unwrap_err();
        assert!(matches!(err, DomainError::EmptySource { .. }));

        let ok = DomainValidator::validate_source(empty, &path("blank.twig"), true).unwrap();
        assert!(ok.is_empty());
    }

    #[test]
    fn non_empty_source_passes_regardless_of_policy() {
        let source = Source::new("hi", "a.twig");
        for allow in [true, false] {
            assert_eq!(
                DomainValidator::validate_source(source.clone(), &path("a.twig"), allow).unwrap(),
                source
            );
        }
    }
}
