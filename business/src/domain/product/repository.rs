use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::ProductRecord;

/// Read/write port over the schemaless product catalog.
///
/// `get_by_id` reports absence as `Ok(None)`: a vanished menu item is an
/// expected outcome during checkout, not a storage failure.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<ProductRecord>, RepositoryError>;
    async fn add(&self, record: &ProductRecord) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
