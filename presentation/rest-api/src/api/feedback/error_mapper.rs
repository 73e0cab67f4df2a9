use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::feedback::errors::FeedbackError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FeedbackError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            FeedbackError::RateLimited(err) => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse::with_detail(
                    "TooManyRequests",
                    "rate_limit.too_many_attempts",
                    format!("Try again in {} seconds.", err.retry_in_seconds()),
                )),
            ),
            FeedbackError::Offline => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("Offline", "feedback.offline")),
            ),
            FeedbackError::RoleEmpty
            | FeedbackError::RoleTooLong
            | FeedbackError::MessageEmpty
            | FeedbackError::MessageTooLong => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ValidationError", &self.to_string())),
            ),
            FeedbackError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", "repository.persistence")),
            ),
        }
    }
}
