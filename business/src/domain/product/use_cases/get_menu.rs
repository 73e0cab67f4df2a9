use async_trait::async_trait;

use crate::domain::product::errors::MenuError;
use crate::domain::product::model::MenuItem;

pub struct GetMenuParams {
    /// Case-sensitive category filter, applied after validation.
    pub category: Option<String>,
}

#[async_trait]
pub trait GetMenuUseCase: Send + Sync {
    async fn execute(&self, params: GetMenuParams) -> Result<Vec<MenuItem>, MenuError>;
}
