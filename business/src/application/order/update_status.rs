use std::sync::Arc;

use async_trait::async_trait;

use crate::application::order::feed::OrderFeed;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{Order, OrderEvent};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

pub struct UpdateOrderStatusUseCaseImpl {
    pub orders: Arc<dyn OrderRepository>,
    pub feed: Arc<OrderFeed>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateOrderStatusUseCase for UpdateOrderStatusUseCaseImpl {
    async fn execute(&self, params: UpdateOrderStatusParams) -> Result<Order, OrderError> {
        let order = self
            .orders
            .get_by_id(params.order_id)
            .await?
            .ok_or(OrderError::NotFound)?;

        if !order.status.can_transition_to(&params.status) {
            self.logger.warn(
                "ORDERS",
                &format!(
                    "Refused moving order {} from {} to {}.",
                    order.id, order.status, params.status
                ),
            );
            return Err(OrderError::IllegalStatusTransition);
        }

        self.orders
            .update_status(order.id, params.status.clone())
            .await?;

        let updated = Order {
            status: params.status,
            ..order
        };
        self.feed.publish(OrderEvent::StatusChanged(updated.clone()));
        self.logger.info(
            "ORDERS",
            &format!("Order {} is now {}.", updated.id, updated.status),
        );
        Ok(updated)
    }
}
