//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use tplfs_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileEntry,
    error::{Context, TplfsResult},
};

/// Filesystem backed by a directory on disk.
///
/// Every path is interpreted relative to `root`. Paths that would leave the
/// root (`..`, absolute paths, drive prefixes, symlinks pointing outside) are
/// treated as absent.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a new local filesystem adapter rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All regular files below the root as `/`-separated relative paths, sorted.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn list_files(&self) -> TplfsResult<Vec<String>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| self.contains(entry.path()));
        for entry in walker {
            let entry = entry.context("walk template root")?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .context("relativise walked path")?;
            let parts: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            files.push(parts.join("/"));
        }
        files.sort();
        debug!(count = files.len(), "listed files");
        Ok(files)
    }

    /// Map a storage path onto the disk, refusing anything outside the root.
    fn locate(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative.components().any(|c| {
            matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
        });
        if escapes {
            debug!(path, "refusing path outside root");
            return None;
        }
        let candidate = self.root.join(relative);
        if candidate.exists() && !self.contains(&candidate) {
            debug!(path, "refusing link outside root");
            return None;
        }
        Some(candidate)
    }

    /// Whether `location`, with links resolved, lies inside the root.
    fn contains(&self, location: &Path) -> bool {
        match (location.canonicalize(), self.root.canonicalize()) {
            (Ok(real), Ok(root)) => real.starts_with(root),
            _ => false,
        }
    }

    fn locate_or_fail(&self, path: &str) -> TplfsResult<PathBuf> {
        self.locate(path)
            .ok_or_else(|| ApplicationError::backend(path, "path escapes the filesystem root").into())
    }
}

impl Filesystem for LocalFilesystem {
    fn has(&self, path: &str) -> bool {
        self.locate(path).is_some_and(|p| p.exists())
    }

    fn get(&self, path: &str) -> TplfsResult<FileEntry> {
        let location = self.locate_or_fail(path)?;
        let metadata =
            std::fs::metadata(&location).map_err(|e| map_io_error(path, e, "get metadata"))?;
        let modified = metadata
            .modified()
            .map(unix_seconds)
            .map_err(|e| map_io_error(path, e, "get modification time"))?;

        Ok(if metadata.is_dir() {
            FileEntry::directory(modified)
        } else {
            FileEntry::file(modified).with_size(metadata.len())
        })
    }

    fn read(&self, path: &str) -> TplfsResult<Vec<u8>> {
        let location = self.locate_or_fail(path)?;
        std::fs::read(&location).map_err(|e| map_io_error(path, e, "read file"))
    }
}

/// Whole seconds relative to the Unix epoch; negative before it.
fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
    }
}

fn map_io_error(path: &str, e: io::Error, operation: &str) -> tplfs_core::error::TplfsError {
    ApplicationError::Backend {
        path: path.to_owned(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
