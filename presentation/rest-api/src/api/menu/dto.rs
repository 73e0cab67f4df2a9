use poem_openapi::Object;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use business::domain::product::model::MenuItem;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct MenuItemResponse {
    /// Catalog document id
    pub id: String,
    /// Display name
    pub name: String,
    /// Display price in dollars
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            price: item.price.to_f64().unwrap_or(0.0),
            category: item.category,
            description: item.description,
            image_url: item.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct SeedResultResponse {
    /// Number of starter products inserted
    pub inserted: u32,
}
