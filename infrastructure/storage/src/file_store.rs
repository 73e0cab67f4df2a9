use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use business::domain::storage::{KeyValueStorage, StorageError};
use tokio::sync::RwLock;
use tracing::warn;

/// Durable key/value store backed by a single JSON file.
///
/// The whole map lives in memory; writes rewrite the file through a
/// temp-then-rename so a crash mid-write never leaves a half-written
/// store. A corrupt or missing file on open starts the store empty
/// rather than failing, matching the degraded-service contract of the
/// storage port.
pub struct FileStore {
    path: PathBuf,
    map: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if let Err(err) = tokio::fs::create_dir_all(parent).await {
                warn!(target: "cafe_api", "[STORAGE] could not create {}: {err}", parent.display());
            }
        }

        let map = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(map) => map,
                Err(err) => {
                    warn!(target: "cafe_api", "[STORAGE] corrupt store file, starting empty: {err}");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                warn!(target: "cafe_api", "[STORAGE] could not read store file, starting empty: {err}");
                HashMap::new()
            }
        };

        Self {
            path,
            map: RwLock::new(map),
        }
    }

    async fn flush(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(map).map_err(|_| StorageError::Io)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, raw).await.map_err(map_io_error)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(map_io_error)?;

        Ok(())
    }
}

fn map_io_error(err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::QuotaExceeded | ErrorKind::StorageFull => StorageError::QuotaExceeded,
        _ => StorageError::Io,
    }
}

#[async_trait]
impl KeyValueStorage for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map.write().await;
        map.insert(key.to_string(), value.to_string());
        self.flush(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.map.write().await;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&map).await
    }
}
