use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::close_cart::CloseCartUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct CloseCartUseCaseImpl {
    pub store: Arc<CartStore>,
}

#[async_trait]
impl CloseCartUseCase for CloseCartUseCaseImpl {
    async fn execute(&self, user_id: &UserId) -> Cart {
        self.store.set_drawer_open(user_id, false).await;
        self.store.load(user_id).await
    }
}
