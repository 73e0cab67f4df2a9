use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

/// Shows the cart drawer and returns the cart in its opened state. The
/// drawer flag is session state only, it is never persisted.
#[async_trait]
pub trait OpenCartUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId) -> Cart;
}
