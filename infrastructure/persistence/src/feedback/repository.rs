use async_trait::async_trait;
use business::domain::errors::RepositoryError;
use business::domain::feedback::model::Feedback;
use business::domain::feedback::repository::FeedbackRepository;
use sqlx::PgPool;

/// PostgreSQL implementation of the feedback repository. Feedback is
/// append only, there is no read path from the API.
pub struct FeedbackRepositoryPostgres {
    pool: PgPool,
}

impl FeedbackRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackRepositoryPostgres {
    async fn save(&self, feedback: &Feedback) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO feedback (user_id, user_email, role, topic, message, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(feedback.user_id.as_str())
        .bind(&feedback.user_email)
        .bind(&feedback.role)
        .bind(feedback.topic.to_string())
        .bind(&feedback.message)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
