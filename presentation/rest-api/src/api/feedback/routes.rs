use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::feedback::model::FeedbackTopic;
use business::domain::feedback::use_cases::submit::{
    SubmitFeedbackParams, SubmitFeedbackUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::feedback::dto::SubmitFeedbackRequest;
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct FeedbackApi {
    submit_use_case: Arc<dyn SubmitFeedbackUseCase>,
}

impl FeedbackApi {
    pub fn new(submit_use_case: Arc<dyn SubmitFeedbackUseCase>) -> Self {
        Self { submit_use_case }
    }
}

/// Feedback API
///
/// Write-only drop box. Submissions are sanitized, validated and throttled
/// to one per minute per user.
#[OpenApi]
impl FeedbackApi {
    /// Leave feedback
    #[oai(path = "/feedback", method = "post", tag = "ApiTags::Feedback")]
    async fn submit(
        &self,
        auth: FirebaseBearer,
        body: Json<SubmitFeedbackRequest>,
    ) -> SubmitFeedbackResponse {
        let Ok(topic) = body.0.topic.parse::<FeedbackTopic>() else {
            return SubmitFeedbackResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "feedback.invalid_topic",
            )));
        };

        match self
            .submit_use_case
            .execute(SubmitFeedbackParams {
                user: auth.0,
                role: body.0.role,
                topic,
                message: body.0.message,
            })
            .await
        {
            Ok(()) => SubmitFeedbackResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitFeedbackResponse::BadRequest(json),
                    429 => SubmitFeedbackResponse::TooManyRequests(json),
                    503 => SubmitFeedbackResponse::ServiceUnavailable(json),
                    _ => SubmitFeedbackResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitFeedbackResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 429)]
    TooManyRequests(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
