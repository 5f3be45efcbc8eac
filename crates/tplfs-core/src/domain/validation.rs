use crate::domain::{
    entities::{FileEntry, Source},
    error::DomainError,
    value_objects::ResolvedPath,
};

/// Centralized domain validation.
///
/// Lookup rules live here, not scattered across the loader.
pub struct DomainValidator;

impl DomainValidator {
    /// A present entry is usable as a template only if it is not a directory.
    pub fn validate_template_entry(
        name: &str,
        path: &ResolvedPath,
        entry: FileEntry,
    ) -> Result<FileEntry, DomainError> {
        if entry.is_directory() {
            return Err(DomainError::DirectoryAsTemplate {
                name: name.to_owned(),
                path: path.as_str().to_owned(),
            });
        }
        Ok(entry)
    }

    /// Empty content is rejected unless the caller opted in.
    pub fn validate_source(
        source: Source,
        path: &ResolvedPath,
        allow_empty: bool,
    ) -> Result<Source, DomainError> {
        if source.is_empty() && !allow_empty {
            return Err(DomainError::EmptySource {
                name: source.name().to_owned(),
                path: path.as_str().to_owned(),
            });
        }
        Ok(source)
    }
}
