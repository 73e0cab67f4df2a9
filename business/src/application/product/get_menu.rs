use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::MenuError;
use crate::domain::product::model::{MenuItem, ProductRecord};
use crate::domain::product::repository::ProductCatalog;
use crate::domain::product::use_cases::get_menu::{GetMenuParams, GetMenuUseCase};
use crate::domain::storage::KeyValueStorage;

const CACHE_KEY: &str = "menu_cache_v1";
const CACHE_TTL_MS: i64 = 60 * 60 * 1000;
const CONTEXT: &str = "MENU";

/// Cached copy of the raw catalog, stored unfiltered so a validation rule
/// change takes effect on the next read without a refetch.
#[derive(Serialize, Deserialize)]
struct CacheEntry {
    data: Vec<ProductRecord>,
    timestamp: i64,
}

pub struct GetMenuUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl GetMenuUseCaseImpl {
    async fn cached_records(&self, now: i64) -> Option<Vec<ProductRecord>> {
        let raw = match self.storage.get(CACHE_KEY).await {
            Ok(value) => value?,
            Err(err) => {
                self.logger.warn(
                    CONTEXT,
                    &format!("Could not read the menu cache, fetching live. {}", err),
                );
                return None;
            }
        };

        let entry = match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                self.logger
                    .warn(CONTEXT, &format!("Menu cache was unreadable, ignoring it. {}", err));
                return None;
            }
        };

        if now - entry.timestamp < CACHE_TTL_MS {
            Some(entry.data)
        } else {
            None
        }
    }

    async fn store_cache(&self, records: &[ProductRecord], now: i64) {
        let entry = CacheEntry {
            data: records.to_vec(),
            timestamp: now,
        };
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(err) => {
                self.logger.error(
                    CONTEXT,
                    "Could not encode the menu cache entry.",
                    Some(&err.to_string()),
                );
                return;
            }
        };
        if let Err(err) = self.storage.set(CACHE_KEY, &raw).await {
            self.logger
                .warn(CONTEXT, &format!("Could not save the menu cache. {}", err));
        }
    }

    fn filter_by_category(items: Vec<MenuItem>, category: Option<&str>) -> Vec<MenuItem> {
        match category {
            Some(category) => items
                .into_iter()
                .filter(|item| item.category.as_deref() == Some(category))
                .collect(),
            None => items,
        }
    }
}

fn validate(records: &[ProductRecord]) -> Vec<MenuItem> {
    records.iter().filter_map(MenuItem::from_record).collect()
}

#[async_trait]
impl GetMenuUseCase for GetMenuUseCaseImpl {
    async fn execute(&self, params: GetMenuParams) -> Result<Vec<MenuItem>, MenuError> {
        let now = self.clock.now_millis();

        if let Some(cached) = self.cached_records(now).await {
            self.logger.debug(CONTEXT, "Serving the menu from cache.");
            return Ok(Self::filter_by_category(
                validate(&cached),
                params.category.as_deref(),
            ));
        }

        let records = self.catalog.get_all().await?;
        let items = validate(&records);

        if !records.is_empty() && items.is_empty() {
            self.logger.error(
                CONTEXT,
                "Every catalog document failed validation, refusing to serve an empty menu.",
                None,
            );
            return Err(MenuError::DataIntegrity);
        }

        self.store_cache(&records, now).await;
        self.logger
            .info(CONTEXT, &format!("Menu refreshed with {} products.", items.len()));

        Ok(Self::filter_by_category(items, params.category.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use crate::domain::storage::StorageError;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::mock;
    use serde_json::json;

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
        pub Storage {}

        #[async_trait]
        impl KeyValueStorage for Storage {
            async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
            async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
            async fn remove(&self, key: &str) -> Result<(), StorageError>;
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

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(self.0).unwrap()
        }
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_, _| ());
        logger.expect_warn().returning(|_, _| ());
        logger.expect_error().returning(|_, _, _| ());
        logger.expect_debug().returning(|_, _| ());
        Arc::new(logger)
    }

    fn use_case(catalog: MockCatalog, storage: MockStorage, now_ms: i64) -> GetMenuUseCaseImpl {
        GetMenuUseCaseImpl {
            catalog: Arc::new(catalog),
            storage: Arc::new(storage),
            clock: Arc::new(FixedClock(now_ms)),
            logger: mock_logger(),
        }
    }

    fn record(id: &str, doc: serde_json::Value) -> ProductRecord {
        ProductRecord::new(id, doc.as_object().cloned().unwrap_or_default())
    }

    fn no_category() -> GetMenuParams {
        GetMenuParams { category: None }
    }

    fn cache_json(timestamp: i64) -> String {
        json!({
            "data": [
                {"id": "latte", "name": "Latte", "price": 4.75, "category": "Coffee"},
                {"id": "broken", "price": 1.0}
            ],
            "timestamp": timestamp
        })
        .to_string()
    }

    #[tokio::test]
    async fn should_serve_fresh_cache_without_touching_catalog() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().times(0);

        let mut storage = MockStorage::new();
        // 30 minutes old against a 1 hour lifetime.
        storage
            .expect_get()
            .returning(|_| Ok(Some(cache_json(1_800_000))));

        let items = use_case(catalog, storage, 3_600_000)
            .execute(no_category())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Latte");
    }

    #[tokio::test]
    async fn should_refetch_when_cache_is_stale() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().times(1).returning(|| {
            Ok(vec![record(
                "mocha",
                json!({"name": "Mocha", "price": 5.25}),
            )])
        });

        let mut storage = MockStorage::new();
        // Exactly one lifetime old, which no longer counts as fresh.
        storage.expect_get().returning(|_| Ok(Some(cache_json(0))));
        storage
            .expect_set()
            .withf(|key, value| key == "menu_cache_v1" && value.contains("Mocha"))
            .times(1)
            .returning(|_, _| Ok(()));

        let items = use_case(catalog, storage, 3_600_000)
            .execute(no_category())
            .await
            .unwrap();
        assert_eq!(items[0].name, "Mocha");
    }

    #[tokio::test]
    async fn should_treat_corrupt_cache_as_miss() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().times(1).returning(|| {
            Ok(vec![record(
                "latte",
                json!({"name": "Latte", "price": 4.75}),
            )])
        });

        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .returning(|_| Ok(Some("{definitely not json".to_string())));
        storage.expect_set().returning(|_, _| Ok(()));

        let items = use_case(catalog, storage, 3_600_000)
            .execute(no_category())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn should_fail_with_data_integrity_when_no_record_validates() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().returning(|| {
            Ok(vec![
                record("a", json!({"price": 1.0})),
                record("b", json!({"name": "  ", "price": 2.0})),
                record("c", json!({"name": "C", "price": -1.0})),
                record("d", json!({"name": "D", "price": "free"})),
                record("e", json!({})),
            ])
        });

        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage.expect_set().times(0);

        let result = use_case(catalog, storage, 0).execute(no_category()).await;
        assert!(matches!(result.unwrap_err(), MenuError::DataIntegrity));
    }

    #[tokio::test]
    async fn should_serve_empty_menu_when_catalog_is_empty() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().returning(|| Ok(vec![]));

        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage.expect_set().times(1).returning(|_, _| Ok(()));

        let items = use_case(catalog, storage, 0)
            .execute(no_category())
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn should_store_raw_records_unfiltered() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().returning(|| {
            Ok(vec![
                record("latte", json!({"name": "Latte", "price": 4.75})),
                record("broken", json!({"price": 1.0})),
            ])
        });

        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .withf(|_, value| value.contains("broken"))
            .times(1)
            .returning(|_, _| Ok(()));

        let items = use_case(catalog, storage, 0)
            .execute(no_category())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn should_still_serve_menu_when_cache_write_fails() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().returning(|| {
            Ok(vec![record(
                "latte",
                json!({"name": "Latte", "price": 4.75}),
            )])
        });

        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .returning(|_, _| Err(StorageError::QuotaExceeded));

        let items = use_case(catalog, storage, 0)
            .execute(no_category())
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn should_apply_category_filter_after_validation() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_all().returning(|| {
            Ok(vec![
                record("latte", json!({"name": "Latte", "price": 4.75, "category": "Coffee"})),
                record("matcha", json!({"name": "Matcha", "price": 5.25, "category": "Tea"})),
            ])
        });

        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage.expect_set().returning(|_, _| Ok(()));

        let items = use_case(catalog, storage, 0)
            .execute(GetMenuParams {
                category: Some("Tea".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Matcha");
    }

    #[tokio::test]
    async fn should_propagate_catalog_failure() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));

        let result = use_case(catalog, storage, 0).execute(no_category()).await;
        assert!(matches!(result.unwrap_err(), MenuError::Repository(_)));
    }
}
