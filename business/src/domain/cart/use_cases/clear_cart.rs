use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;

/// Empties the cart and drops its persisted record. Used by the confirmation
/// step after a successful order and by sign-out.
#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId);
}
