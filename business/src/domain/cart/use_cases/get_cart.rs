use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

/// Loads the caller's cart. A cart that cannot be read (never saved, corrupt
/// record, storage trouble) comes back empty, so this cannot fail.
#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId) -> Cart;
}
