use async_trait::async_trait;

use crate::domain::feedback::errors::FeedbackError;
use crate::domain::feedback::model::FeedbackTopic;
use crate::domain::shared::value_objects::CurrentUser;

pub struct SubmitFeedbackParams {
    pub user: CurrentUser,
    pub role: String,
    pub topic: FeedbackTopic,
    pub message: String,
}

#[async_trait]
pub trait SubmitFeedbackUseCase: Send + Sync {
    async fn execute(&self, params: SubmitFeedbackParams) -> Result<(), FeedbackError>;
}
