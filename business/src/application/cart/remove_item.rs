use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::remove_item::RemoveCartItemUseCase;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct RemoveCartItemUseCaseImpl {
    pub store: Arc<CartStore>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, user_id: &UserId, product_id: &ProductId) -> Cart {
        let mut cart = self.store.load(user_id).await;
        cart.remove_item(product_id);
        self.store.persist(user_id, &cart).await;
        cart
    }
}
