use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::OrderStatus;

pub struct ListOrdersParams {
    /// None lists every status.
    pub status: Option<OrderStatus>,
    /// Capped at 100 records regardless of what is asked for.
    pub limit: Option<u32>,
}

#[async_trait]
pub trait ListOrdersUseCase: Send + Sync {
    async fn execute(&self, params: ListOrdersParams) -> Result<Vec<Order>, OrderError>;
}
