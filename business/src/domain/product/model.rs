use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::shared::value_objects::ProductId;

/// A raw catalog document exactly as the store holds it.
///
/// The catalog is schemaless: beyond the id nothing is guaranteed, so the
/// body is kept as an open JSON map and every read path validates before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    #[serde(flatten)]
    pub doc: Map<String, Value>,
}

impl ProductRecord {
    pub fn new(id: impl Into<String>, doc: Map<String, Value>) -> Self {
        Self { id: id.into(), doc }
    }

    fn string_field(&self, key: &str) -> Option<String> {
        self.doc
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// A catalog document that passed validation and is safe to price and render.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Validates a raw record. A usable document has an id, a non-empty name
    /// and a numeric, non-negative price; everything else is optional.
    pub fn from_record(record: &ProductRecord) -> Option<Self> {
        if record.id.trim().is_empty() {
            return None;
        }

        let name = record
            .doc
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())?
            .to_string();

        let price = record
            .doc
            .get("price")
            .and_then(Value::as_f64)
            .and_then(Decimal::from_f64)
            .filter(|price| !price.is_sign_negative())?;

        Some(Self {
            id: ProductId::new(record.id.clone()),
            name,
            price,
            category: record.string_field("category"),
            description: record.string_field("description"),
            image_url: record.string_field("image_url"),
        })
    }
}
