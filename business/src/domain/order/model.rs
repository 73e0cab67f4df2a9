use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::pricing::PriceBreakdown;
use crate::domain::order::value_objects::{OrderStatus, TokenNumber};
use crate::domain::shared::value_objects::{ProductId, UserId};

/// One verified line of an order. Name and price come from the catalog at
/// checkout time, never from the cart's display snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

/// A submitted order as the store holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub user_email: String,
    pub items: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub token_number: TokenNumber,
    pub created_at: DateTime<Utc>,
}

/// An order ready to be written. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub user_email: String,
    pub items: Vec<OrderLine>,
    pub total: Decimal,
    pub token_number: TokenNumber,
    pub created_at: DateTime<Utc>,
}

/// Payload handed back to the buyer after a successful submission.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub token_number: TokenNumber,
    pub items: Vec<OrderLine>,
    pub pricing: PriceBreakdown,
}

/// Events published on the order feed for the kitchen display.
#[derive(Debug, Clone)]
pub enum OrderEvent {
    Created(Order),
    StatusChanged(Order),
}

impl OrderEvent {
    pub fn order(&self) -> &Order {
        match self {
            OrderEvent::Created(order) => order,
            OrderEvent::StatusChanged(order) => order,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            OrderEvent::Created(_) => "created",
            OrderEvent::StatusChanged(_) => "status_changed",
        }
    }
}
