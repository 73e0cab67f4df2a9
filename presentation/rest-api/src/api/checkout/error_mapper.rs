use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CheckoutError::RateLimited(err) => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse::with_detail(
                    "TooManyRequests",
                    "rate_limit.too_many_attempts",
                    format!("Try again in {} seconds.", err.retry_in_seconds()),
                )),
            ),
            CheckoutError::Offline => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("Offline", "checkout.offline")),
            ),
            CheckoutError::CartEmpty => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ValidationError", "checkout.cart_empty")),
            ),
            CheckoutError::InvalidTotal => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "ValidationError",
                    "checkout.invalid_total",
                )),
            ),
            CheckoutError::ProductVanished { name } => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::with_detail(
                    "ProductVanished",
                    "checkout.product_vanished",
                    format!("\"{name}\" is no longer on the menu."),
                )),
            ),
            CheckoutError::AlreadyInProgress => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "Conflict",
                    "checkout.already_in_progress",
                )),
            ),
            CheckoutError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", "repository.persistence")),
            ),
        }
    }
}
