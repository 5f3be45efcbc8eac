//! In-memory filesystem adapter for testing and embedded templates.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tplfs_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::FileEntry,
    error::TplfsResult,
};

/// In-memory filesystem.
///
/// Paths are `/`-separated; leading and trailing separators are ignored, so
/// `"/a/b.twig"` and `"a/b.twig"` name the same file. Every ancestor of a
/// stored file counts as a directory, like prefixes in object storage.
/// A stored file cannot have children.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<String, MemoryFile>,
    directories: BTreeSet<String>,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    content: Vec<u8>,
    modified: i64,
}

impl MemoryFilesystemInner {
    fn is_directory(&self, key: &str) -> bool {
        if key.is_empty() || self.directories.contains(key) {
            return true;
        }
        let nested = format!("{key}/");
        self.files
            .range(nested.clone()..)
            .next()
            .is_some_and(|(path, _)| path.starts_with(&nested))
    }

    /// The nearest ancestor of `key` stored as a file, if any.
    fn file_ancestor<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.match_indices('/')
            .map(|(at, _)| &key[..at])
            .find(|ancestor| self.files.contains_key(*ancestor))
    }
}

fn normalise(path: &str) -> &str {
    path.trim_matches('/')
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` at `path` with the given modification time.
    pub fn insert_file(
        &self,
        path: &str,
        content: impl Into<Vec<u8>>,
        modified: i64,
    ) -> TplfsResult<()> {
        let key = normalise(path);
        let mut inner = self.write()?;
        if inner.is_directory(key) {
            return Err(ApplicationError::backend(path, "a directory exists at this path").into());
        }
        if let Some(file) = inner.file_ancestor(key) {
            return Err(ApplicationError::backend(path, format!("'{file}' is a file")).into());
        }
        inner.files.insert(
            key.to_owned(),
            MemoryFile {
                content: content.into(),
                modified,
            },
        );
        Ok(())
    }

    /// Register an explicit (possibly empty) directory.
    pub fn insert_directory(&self, path: &str) -> TplfsResult<()> {
        let key = normalise(path);
        let mut inner = self.write()?;
        if inner.files.contains_key(key) {
            return Err(ApplicationError::backend(path, "a file exists at this path").into());
        }
        if let Some(file) = inner.file_ancestor(key) {
            return Err(ApplicationError::backend(path, format!("'{file}' is a file")).into());
        }
        inner.directories.insert(key.to_owned());
        Ok(())
    }

    /// Update a file's modification time without changing its content.
    pub fn touch(&self, path: &str, modified: i64) -> TplfsResult<()> {
        let mut inner = self.write()?;
        let file = inner
            .files
            .get_mut(normalise(path))
            .ok_or_else(|| ApplicationError::backend(path, "no such file"))?;
        file.modified = modified;
        Ok(())
    }

    /// Remove a file or an explicit directory. Returns whether anything was removed.
    pub fn remove(&self, path: &str) -> TplfsResult<bool> {
        let key = normalise(path);
        let mut inner = self.write()?;
        Ok(inner.files.remove(key).is_some() || inner.directories.remove(key))
    }

    /// List all file paths, sorted.
    pub fn list_files(&self) -> TplfsResult<Vec<String>> {
        Ok(self.read_lock()?.files.keys().cloned().collect())
    }

    fn read_lock(&self) -> TplfsResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> TplfsResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl Filesystem for MemoryFilesystem {
    fn has(&self, path: &str) -> bool {
        let key = normalise(path);
        match self.inner.read() {
            Ok(inner) => inner.files.contains_key(key) || inner.is_directory(key),
            Err(_) => false,
        }
    }

    fn get(&self, path: &str) -> TplfsResult<FileEntry> {
        let key = normalise(path);
        let inner = self.read_lock()?;

        if let Some(file) = inner.files.get(key) {
            return Ok(FileEntry::file(file.modified).with_size(file.content.len() as u64));
        }
        if inner.is_directory(key) {
            return Ok(FileEntry::directory(0));
        }
        Err(ApplicationError::backend(path, "no such entry").into())
    }

    fn read(&self, path: &str) -> TplfsResult<Vec<u8>> {
        let key = normalise(path);
        let inner = self.read_lock()?;

        match inner.files.get(key) {
            Some(file) => Ok(file.content.clone()),
            None if inner.is_directory(key) => {
                Err(ApplicationError::backend(path, "is a directory").into())
            }
            None => Err(ApplicationError::backend(path, "no such file").into()),
        }
    }
}
