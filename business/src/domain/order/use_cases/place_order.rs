use async_trait::async_trait;

use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::OrderConfirmation;
use crate::domain::shared::value_objects::CurrentUser;

/// Runs the whole checkout: cooldown, connectivity and cart guards, price
/// verification against the live catalog, then the order write. The cart is
/// left untouched; confirmation clears it.
#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, user: &CurrentUser) -> Result<OrderConfirmation, CheckoutError>;
}
