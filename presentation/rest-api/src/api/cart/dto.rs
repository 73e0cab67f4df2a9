use poem_openapi::Object;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    /// Catalog document id
    pub id: String,
    /// Display name copied when the item was added
    pub name: String,
    /// Display price in dollars copied when the item was added
    pub price: f64,
    pub quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            price: item.price.to_f64().unwrap_or(0.0),
            quantity: item.quantity,
            image_url: item.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Total units across all lines
    pub total_items: u64,
    /// Display subtotal in dollars, derived from the advisory snapshots
    pub subtotal: f64,
    /// Whether the cart drawer is showing for this session
    pub is_open: bool,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            total_items: cart.total_items(),
            subtotal: cart.subtotal().to_f64().unwrap_or(0.0),
            is_open: cart.is_open(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Catalog document id
    pub id: String,
    /// Display name snapshot
    pub name: String,
    /// Display price snapshot in dollars, advisory only
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SetQuantityRequest {
    /// New quantity for the line; zero or less removes it
    pub quantity: i64,
}
