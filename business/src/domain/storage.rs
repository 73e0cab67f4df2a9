use async_trait::async_trait;

/// Errors raised by the durable key/value storage adapters.
///
/// Storage is a convenience layer (carts, cooldown records, the menu cache),
/// so callers treat every variant as degraded service, never as a reason to
/// abort a user flow.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.unavailable")]
    Unavailable,
    #[error("storage.quota_exceeded")]
    QuotaExceeded,
    #[error("storage.io")]
    Io,
}

/// Durable string key/value storage port.
///
/// One value per key; `get` returns `None` for keys that were never written
/// or were removed. Values are opaque strings, the callers own the encoding.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
