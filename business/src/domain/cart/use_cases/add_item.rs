use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct AddCartItemParams {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Cart;
}
