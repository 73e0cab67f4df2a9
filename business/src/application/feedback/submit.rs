use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::connectivity::ConnectivityMonitor;
use crate::domain::feedback::errors::FeedbackError;
use crate::domain::feedback::model::{Feedback, NewFeedbackProps};
use crate::domain::feedback::repository::FeedbackRepository;
use crate::domain::feedback::use_cases::submit::{SubmitFeedbackParams, SubmitFeedbackUseCase};
use crate::domain::logger::Logger;
use crate::domain::rate_limit::service::RateLimitGuard;

const FEEDBACK_ACTION: &str = "feedback_submit";
const FEEDBACK_COOLDOWN: Duration = Duration::from_secs(60);
const CONTEXT: &str = "FEEDBACK";

pub struct SubmitFeedbackUseCaseImpl {
    pub rate_limiter: Arc<dyn RateLimitGuard>,
    pub connectivity: Arc<dyn ConnectivityMonitor>,
    pub repository: Arc<dyn FeedbackRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitFeedbackUseCase for SubmitFeedbackUseCaseImpl {
    async fn execute(&self, params: SubmitFeedbackParams) -> Result<(), FeedbackError> {
        self.rate_limiter
            .check_limit(
                &format!("{}:{}", FEEDBACK_ACTION, params.user.id),
                FEEDBACK_COOLDOWN,
            )
            .await?;

        if !self.connectivity.is_online().await {
            return Err(FeedbackError::Offline);
        }

        let feedback = Feedback::new(
            NewFeedbackProps {
                user_id: params.user.id,
                user_email: params.user.email,
                role: params.role,
                topic: params.topic,
                message: params.message,
            },
            self.clock.now(),
        )?;

        self.repository.save(&feedback).await?;
        self.logger.info(CONTEXT, "Feedback received, thank you.");
        Ok(())
    }
}
