use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Feedback;

/// Write-only port: feedback is collected here and read elsewhere.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn save(&self, feedback: &Feedback) -> Result<(), RepositoryError>;
}
