use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{ProductId, UserId};

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId, product_id: &ProductId) -> Cart;
}
