use async_trait::async_trait;
use business::domain::errors::RepositoryError;
use business::domain::product::model::ProductRecord;
use business::domain::product::repository::ProductCatalog;
use business::domain::shared::value_objects::ProductId;
use serde_json::Value;
use sqlx::PgPool;

use crate::product::entity::ProductDocumentEntity;

/// PostgreSQL implementation of the product catalog
pub struct ProductCatalogPostgres {
    pool: PgPool,
}

impl ProductCatalogPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogPostgres {
    async fn get_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductDocumentEntity>(
            "SELECT id, doc FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<ProductRecord>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductDocumentEntity>(
            "SELECT id, doc FROM products WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn add(&self, record: &ProductRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO products (id, doc) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc",
        )
        .bind(&record.id)
        .bind(Value::Object(record.doc.clone()))
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(u64::try_from(total).unwrap_or(0))
    }
}
