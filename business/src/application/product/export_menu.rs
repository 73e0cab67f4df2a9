use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::MenuError;
use crate::domain::product::model::ProductRecord;
use crate::domain::product::repository::ProductCatalog;
use crate::domain::product::use_cases::export_menu::ExportMenuUseCase;

pub struct ExportMenuUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExportMenuUseCase for ExportMenuUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductRecord>, MenuError> {
        let records = self.catalog.get_all().await?;
        self.logger
            .info("MENU", &format!("Exported {} catalog documents.", records.len()));
        Ok(records)
    }
}
