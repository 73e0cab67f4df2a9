use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

/// Acknowledges a successful submission from the confirmation screen: clears
/// the buyer's cart and returns the order for display. Orders belonging to
/// someone else read as not found.
#[async_trait]
pub trait ConfirmOrderUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId, order_id: Uuid) -> Result<Order, OrderError>;
}
