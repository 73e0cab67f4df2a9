use async_trait::async_trait;

use crate::domain::product::errors::MenuError;
use crate::domain::product::model::ProductRecord;

/// Dumps every raw catalog document, unvalidated, for backups.
#[async_trait]
pub trait ExportMenuUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProductRecord>, MenuError>;
}
