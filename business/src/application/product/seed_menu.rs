use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::MenuError;
use crate::domain::product::repository::ProductCatalog;
use crate::domain::product::seed::starter_menu;
use crate::domain::product::use_cases::seed_menu::SeedMenuUseCase;

pub struct SeedMenuUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedMenuUseCase for SeedMenuUseCaseImpl {
    async fn execute(&self) -> Result<u32, MenuError> {
        if self.catalog.count().await? > 0 {
            self.logger.warn(
                "MENU",
                "Seeding refused, the catalog already has products.",
            );
            return Err(MenuError::CatalogNotEmpty);
        }

        let seed = starter_menu();
        for record in &seed {
            self.catalog.add(record).await?;
        }

        let written = seed.len() as u32;
        self.logger
            .info("MENU", &format!("Seeded the catalog with {} products.", written));
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductRecord;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl ProductCatalog for Catalog {
            async fn get_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Option<ProductRecord>, RepositoryError>;
            async fn add(&self, record: &ProductRecord) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, context: &str, message: &str);
            fn warn(&self, context: &str, message: &str);
            fn error<'a>(&self, context: &str, message: &str, details: Option<&'a str>);
            fn debug(&self, context: &str, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_, _| ());
        logger.expect_warn().returning(|_, _| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_seed_six_products_into_empty_catalog() {
        let mut catalog = MockCatalog::new();
        catalog.expect_count().returning(|| Ok(0));
        catalog.expect_add().times(6).returning(|_| Ok(()));

        let use_case = SeedMenuUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };
        assert_eq!(use_case.execute().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn should_refuse_to_overwrite_populated_catalog() {
        let mut catalog = MockCatalog::new();
        catalog.expect_count().returning(|| Ok(3));
        catalog.expect_add().times(0);

        let use_case = SeedMenuUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };
        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            MenuError::CatalogNotEmpty
        ));
    }

    #[tokio::test]
    async fn should_propagate_write_failure() {
        let mut catalog = MockCatalog::new();
        catalog.expect_count().returning(|| Ok(0));
        catalog
            .expect_add()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = SeedMenuUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };
        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            MenuError::Repository(_)
        ));
    }
}
