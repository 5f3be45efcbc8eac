//! Entry descriptors returned by filesystem backends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata handle for one filesystem entry.
///
/// `last_modified` is in whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    kind: EntryKind,
    last_modified: i64,
    size: Option<u64>,
}

impl FileEntry {
    pub fn file(last_modified: i64) -> Self {
        Self {
            kind: EntryKind::File,
            last_modified,
            size: None,
        }
    }

    pub fn directory(last_modified: i64) -> Self {
        Self {
            kind: EntryKind::Directory,
            last_modified,
            size: None,
        }
    }

    /// Attach a byte size, when the backend knows it cheaply.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn last_modified(&self) -> i64 {
        self.last_modified
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    /// `true` if an artifact stamped at `reference` is still valid.
    ///
    /// Boundary inclusive: an entry modified at exactly `reference` is fresh.
    pub fn is_fresh_at(&self, reference: i64) -> bool {
        reference >= self.last_modified
    }
}
