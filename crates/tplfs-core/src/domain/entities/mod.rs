pub mod file_entry;
pub mod source;

pub use crate::domain::DomainError;
pub use file_entry::{EntryKind, FileEntry};
pub use source::Source;
