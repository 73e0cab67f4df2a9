use async_trait::async_trait;
use business::domain::errors::RepositoryError;
use business::domain::order::model::{NewOrder, Order};
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderStatus;
use sqlx::PgPool;
use uuid::Uuid;

use crate::order::entity::OrderEntity;

const ORDER_COLUMNS: &str = "id, user_id, user_email, items, total, status, token_number, created_at";

/// PostgreSQL implementation of the order repository
pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let items =
            serde_json::to_value(&order.items).map_err(|_| RepositoryError::DatabaseError)?;

        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "INSERT INTO orders (user_id, user_email, items, total, status, token_number, created_at)
             VALUES ($1, $2, $3, $4, 'pending', $5, $6)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(order.user_id.as_str())
        .bind(&order.user_email)
        .bind(items)
        .bind(order.total)
        .bind(i32::try_from(order.token_number.as_u32()).unwrap_or(0))
        .bind(order.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.into_domain())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_recent(
        &self,
        status: Option<OrderStatus>,
        limit: u32,
    ) -> Result<Vec<Order>, RepositoryError> {
        let entities = match status {
            Some(status) => {
                sqlx::query_as::<_, OrderEntity>(&format!(
                    "SELECT {ORDER_COLUMNS} FROM orders
                     WHERE status = $1 ORDER BY created_at DESC LIMIT $2"
                ))
                .bind(status.to_string())
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, OrderEntity>(&format!(
                    "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC LIMIT $1"
                ))
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE orders SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.to_string())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found());
        }

        Ok(())
    }
}
