use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;

pub struct UpdateOrderStatusParams {
    pub order_id: Uuid,
    pub status: OrderStatus,
}

/// Staff resolution of an order. Only pending orders can move, and only to
/// completed or cancelled. Returns the updated record.
#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError>;
}
