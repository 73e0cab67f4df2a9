use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{NewOrder, Order};
use super::value_objects::OrderStatus;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order and returns it with its store-assigned id.
    async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError>;
    /// Newest first, at most `limit` records, optionally narrowed by status.
    async fn get_recent(
        &self,
        status: Option<OrderStatus>,
        limit: u32,
    ) -> Result<Vec<Order>, RepositoryError>;
    async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), RepositoryError>;
}
