use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use business::domain::storage::KeyValueStorage;
use storage::file_store::FileStore;
use storage::memory_store::MemoryStore;
use tracing::info;

/// Initialize durable key/value storage from environment variables.
///
/// Environment variables:
/// - STORAGE_DATA_DIR: Directory for the JSON store file. When unset the
///   store is kept in memory and carts, cooldowns and the menu cache do
///   not survive a restart.
pub async fn init_storage() -> Arc<dyn KeyValueStorage> {
    match env::var("STORAGE_DATA_DIR") {
        Ok(dir) => {
            let path = PathBuf::from(dir).join("storefront.json");
            info!("Using file-backed storage at {}", path.display());
            Arc::new(FileStore::open(path).await)
        }
        Err(_) => {
            info!("STORAGE_DATA_DIR not set, using in-memory storage");
            Arc::new(MemoryStore::new())
        }
    }
}
