use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct GetCartUseCaseImpl {
    pub store: Arc<CartStore>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, user_id: &UserId) -> Cart {
        self.store.load(user_id).await
    }
}
