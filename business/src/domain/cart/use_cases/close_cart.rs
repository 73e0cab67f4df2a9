use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

/// Hides the cart drawer without touching its contents.
#[async_trait]
pub trait CloseCartUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId) -> Cart;
}
