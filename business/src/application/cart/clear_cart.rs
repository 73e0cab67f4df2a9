use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::use_cases::clear_cart::ClearCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;

pub struct ClearCartUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, user_id: &UserId) {
        self.store.clear(user_id).await;
        self.logger.info("CART", "Cart cleared.");
    }
}
