use poem_openapi::Object;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::{OrderConfirmation, OrderLine};
use business::domain::order::pricing::PriceBreakdown;
use business::domain::order::submission::SubmissionState;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderLineResponse {
    /// Catalog document id
    pub product_id: String,
    /// Name the catalog held at verification time
    pub name: String,
    /// Price the catalog held at verification time, in dollars
    pub price: f64,
    pub quantity: u32,
}

impl From<&OrderLine> for OrderLineResponse {
    fn from(line: &OrderLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            price: line.price.to_f64().unwrap_or(0.0),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct PricingResponse {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl From<&PriceBreakdown> for PricingResponse {
    fn from(pricing: &PriceBreakdown) -> Self {
        Self {
            subtotal: pricing.subtotal.to_f64().unwrap_or(0.0),
            tax: pricing.tax.to_f64().unwrap_or(0.0),
            total: pricing.total.to_f64().unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderConfirmationResponse {
    pub order_id: Uuid,
    /// Four digit pickup token to show at the counter
    pub token_number: u32,
    pub items: Vec<OrderLineResponse>,
    pub pricing: PricingResponse,
}

impl From<OrderConfirmation> for OrderConfirmationResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        Self {
            order_id: confirmation.order_id,
            token_number: confirmation.token_number.as_u32(),
            items: confirmation.items.iter().map(OrderLineResponse::from).collect(),
            pricing: PricingResponse::from(&confirmation.pricing),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CheckoutStateResponse {
    /// One of idle, verifying, submitting, succeeded, failed
    pub state: String,
    #[oai(skip_serializing_if_is_none)]
    pub order_id: Option<Uuid>,
    #[oai(skip_serializing_if_is_none)]
    pub reason: Option<String>,
}

impl From<SubmissionState> for CheckoutStateResponse {
    fn from(state: SubmissionState) -> Self {
        let label = state.to_string();
        match state {
            SubmissionState::Succeeded { order_id } => Self {
                state: label,
                order_id: Some(order_id),
                reason: None,
            },
            SubmissionState::Failed { reason } => Self {
                state: label,
                order_id: None,
                reason: Some(reason),
            },
            _ => Self {
                state: label,
                order_id: None,
                reason: None,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ConfirmRequest {
    /// The order id returned by checkout
    pub order_id: Uuid,
}
