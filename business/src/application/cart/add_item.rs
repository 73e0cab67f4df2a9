use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::{Cart, ItemSnapshot};
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Cart {
        let mut cart = self.store.load(&params.user_id).await;
        cart.add_item(ItemSnapshot {
            id: params.product_id,
            name: params.name,
            price: params.price,
            image_url: params.image_url,
        });
        self.store.persist(&params.user_id, &cart).await;
        self.logger
            .debug("CART", &format!("Cart now holds {} items.", cart.total_items()));
        cart
    }
}
