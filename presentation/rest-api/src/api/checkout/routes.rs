use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::application::order::submissions::SubmissionTracker;
use business::domain::order::use_cases::confirm_order::ConfirmOrderUseCase;
use business::domain::order::use_cases::place_order::PlaceOrderUseCase;

use crate::api::checkout::dto::{CheckoutStateResponse, ConfirmRequest, OrderConfirmationResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::orders::dto::OrderResponse;
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    confirm_order_use_case: Arc<dyn ConfirmOrderUseCase>,
    submissions: Arc<SubmissionTracker>,
}

impl CheckoutApi {
    pub fn new(
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
        confirm_order_use_case: Arc<dyn ConfirmOrderUseCase>,
        submissions: Arc<SubmissionTracker>,
    ) -> Self {
        Self {
            place_order_use_case,
            confirm_order_use_case,
            submissions,
        }
    }
}

/// Checkout API
///
/// Turns the caller's cart into a pending order. Placing the order never
/// touches the cart; the storefront acknowledges the confirmation screen
/// through `/checkout/confirm`, which is the only step that clears it.
#[OpenApi]
impl CheckoutApi {
    /// Place the order
    ///
    /// Runs the cooldown, connectivity and cart guards, re-prices every line
    /// from the live catalog, and writes the order. The response carries the
    /// verified items and totals, which may differ from what the cart showed.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn place_order(&self, auth: FirebaseBearer) -> PlaceOrderResponse {
        match self.place_order_use_case.execute(&auth.0).await {
            Ok(confirmation) => PlaceOrderResponse::Created(Json(confirmation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    429 => PlaceOrderResponse::TooManyRequests(json),
                    503 => PlaceOrderResponse::ServiceUnavailable(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Where does my submission stand
    ///
    /// Reports the checkout state machine for the caller: idle, verifying,
    /// submitting, succeeded or failed.
    #[oai(path = "/checkout/state", method = "get", tag = "ApiTags::Checkout")]
    async fn submission_state(&self, auth: FirebaseBearer) -> SubmissionStateResponse {
        let state = self.submissions.state(&auth.0.id).await;
        SubmissionStateResponse::Ok(Json(state.into()))
    }

    /// Acknowledge the confirmation screen
    ///
    /// Clears the caller's cart and resets the submission machine. Safe to
    /// repeat; confirming an order that is not the caller's reads as 404.
    #[oai(path = "/checkout/confirm", method = "post", tag = "ApiTags::Checkout")]
    async fn confirm_order(
        &self,
        auth: FirebaseBearer,
        body: Json<ConfirmRequest>,
    ) -> ConfirmOrderResponse {
        match self
            .confirm_order_use_case
            .execute(&auth.0.id, body.0.order_id)
            .await
        {
            Ok(order) => ConfirmOrderResponse::Ok(Json(OrderResponse::from(&order))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ConfirmOrderResponse::NotFound(json),
                    _ => ConfirmOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderConfirmationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmissionStateResponse {
    #[oai(status = 200)]
    Ok(Json<CheckoutStateResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConfirmOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
