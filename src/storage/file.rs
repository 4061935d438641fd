use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::platform;
use crate::storage::store::KeyValueStore;
use crate::types::errors::StorageError;

/// File-backed key-value store.
///
/// Each key maps to one JSON file under the root directory
/// (`<root>/<key>.json`). Writes replace the file wholesale; a missing file
/// reads as an absent key. The root directory is created on first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a `FileStore` rooted at the given directory.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Creates a `FileStore` rooted at the platform data directory.
    ///
    /// - **Linux**: `~/.local/share/linkshelf` (or `$XDG_DATA_HOME/linkshelf`)
    /// - **macOS**: `~/Library/Application Support/Linkshelf`
    /// - **Windows**: `%APPDATA%/Linkshelf`
    pub fn open_default() -> Self {
        Self::new(platform::get_data_dir())
    }

    /// Returns the root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            StorageError::WriteFailed(format!(
                "Failed to create store directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        let path = self.path_for(key);
        fs::write(&path, value).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore").field("root", &self.root).finish()
    }
}
