use async_trait::async_trait;

use crate::domain::product::errors::MenuError;

/// Installs the starter menu. Refuses to touch a catalog that already has
/// documents in it. Returns how many products were written.
#[async_trait]
pub trait SeedMenuUseCase: Send + Sync {
    async fn execute(&self) -> Result<u32, MenuError>;
}
