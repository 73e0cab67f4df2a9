use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::{Order, OrderEvent};

use crate::api::checkout::dto::OrderLineResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: String,
    pub user_email: String,
    pub items: Vec<OrderLineResponse>,
    /// Verified total in dollars, tax included
    pub total: f64,
    /// One of pending, completed, cancelled
    pub status: String,
    /// Four digit pickup token called out at the counter
    pub token_number: u32,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.to_string(),
            user_email: order.user_email.clone(),
            items: order.items.iter().map(OrderLineResponse::from).collect(),
            total: order.total.to_f64().unwrap_or(0.0),
            status: order.status.to_string(),
            token_number: order.token_number.as_u32(),
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateStatusRequest {
    /// Target status; only completed and cancelled are accepted
    pub status: String,
}

/// One entry on the live feed for the kitchen display.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderEventResponse {
    /// One of created, status_changed
    pub kind: String,
    pub order: OrderResponse,
}

impl From<&OrderEvent> for OrderEventResponse {
    fn from(event: &OrderEvent) -> Self {
        Self {
            kind: event.kind().to_string(),
            order: OrderResponse::from(event.order()),
        }
    }
}
