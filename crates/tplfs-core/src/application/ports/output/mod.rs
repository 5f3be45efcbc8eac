//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the loader needs from storage.
//! The `tplfs-adapters` crate provides implementations.

use crate::domain::FileEntry;
use crate::error::TplfsResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tplfs_adapters::filesystem::LocalFilesystem` (directory on disk)
/// - `tplfs_adapters::filesystem::MemoryFilesystem` (testing, embedding)
///
/// ## Design Notes
///
/// - Paths are plain `/`-separated strings; backends decide what they mean
/// - Backends enforce their own boundary (e.g. refusing `..` escapes)
/// - Implementations must tolerate concurrent readers
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if an entry (file or directory) exists at `path`.
    fn has(&self, path: &str) -> bool;

    /// Metadata for the entry at `path`.
    fn get(&self, path: &str) -> TplfsResult<FileEntry>;

    /// Raw content of the file at `path`. An empty vector means the backend
    /// had nothing to return.
    fn read(&self, path: &str) -> TplfsResult<Vec<u8>>;
}
