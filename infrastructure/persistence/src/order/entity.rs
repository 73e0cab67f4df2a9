use business::domain::order::model::{Order, OrderLine};
use business::domain::order::value_objects::{OrderStatus, TokenNumber};
use business::domain::shared::value_objects::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::FromRow;

/// Database entity representing an order row. Line items are stored as a
/// jsonb snapshot of the verified cart at checkout time.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: uuid::Uuid,
    pub user_id: String,
    pub user_email: String,
    pub items: Value,
    pub total: Decimal,
    pub status: String,
    pub token_number: i32,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    /// Converts the database entity into a domain order
    pub fn into_domain(self) -> Order {
        let items: Vec<OrderLine> = serde_json::from_value(self.items).unwrap_or_default();

        Order {
            id: self.id,
            user_id: UserId::new(self.user_id),
            user_email: self.user_email,
            items,
            total: self.total,
            status: self.status.parse().unwrap_or(OrderStatus::Pending),
            token_number: TokenNumber::new(u32::try_from(self.token_number).unwrap_or(0)),
            created_at: self.created_at,
        }
    }
}
