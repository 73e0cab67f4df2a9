use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct SetCartQuantityParams {
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Signed on purpose: zero and negative values remove the line.
    pub quantity: i64,
}

#[async_trait]
pub trait SetCartQuantityUseCase: Send + Sync {
    async fn execute(&self, params: SetCartQuantityParams) -> Cart;
}
