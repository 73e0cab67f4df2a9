use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::cart::store::CartStore;
use crate::application::order::submissions::SubmissionTracker;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::confirm_order::ConfirmOrderUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct ConfirmOrderUseCaseImpl {
    pub orders: Arc<dyn OrderRepository>,
    pub cart_store: Arc<CartStore>,
    pub submissions: Arc<SubmissionTracker>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmOrderUseCase for ConfirmOrderUseCaseImpl {
    async fn execute(&self, user_id: &UserId, order_id: Uuid) -> Result<Order, OrderError> {
        let order = self
            .orders
            .get_by_id(order_id)
            .await?
            .filter(|order| &order.user_id == user_id)
            .ok_or(OrderError::NotFound)?;

        self.cart_store.clear(user_id).await;
        self.submissions.reset(user_id).await;
        self.logger
            .info("CHECKOUT", "Order confirmed, cart cleared for the next round.");

        Ok(order)
    }
}
