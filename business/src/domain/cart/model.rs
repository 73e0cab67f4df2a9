use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::ProductId;

/// One line of the cart.
///
/// `name`, `price` and `image_url` are the display snapshot copied from the
/// menu at the moment the item was added. They drive rendering only; checkout
/// re-reads the authoritative values from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Serialized as a plain JSON number, matching the stored record shape.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Display snapshot of a menu item, as supplied by the caller when adding.
#[derive(Debug, Clone)]
pub struct ItemSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// A user's cart: an ordered list of items plus a drawer visibility flag.
///
/// The flag is session state and is never persisted. Totals are always
/// derived from the item list, never cached.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    is_open: bool,
}

impl Cart {
    /// Rebuilds a cart from a persisted item list. The drawer starts closed.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self {
            items,
            is_open: false,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price times quantity over the display snapshots.
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }

    /// Adds one unit of the given menu item and opens the drawer.
    ///
    /// If the item is already in the cart only its quantity grows; the stored
    /// snapshot is kept as-is. Never fails.
    pub fn add_item(&mut self, snapshot: ItemSnapshot) {
        match self.items.iter_mut().find(|item| item.id == snapshot.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(1);
            }
            None => {
                self.items.push(CartItem {
                    id: snapshot.id,
                    name: snapshot.name,
                    price: snapshot.price,
                    quantity: 1,
                    image_url: snapshot.image_url,
                });
            }
        }
        self.is_open = true;
    }

    /// Removes the line with the given id. Unknown ids are a silent no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Replaces a line's quantity. Anything below one removes the line, so a
    /// quantity of zero can never linger in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}
