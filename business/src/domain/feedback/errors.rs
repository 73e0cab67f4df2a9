use crate::domain::rate_limit::errors::RateLimitError;

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("rate_limit.too_many_attempts")]
    RateLimited(#[from] RateLimitError),
    #[error("feedback.offline")]
    Offline,
    #[error("feedback.role_empty")]
    RoleEmpty,
    #[error("feedback.role_too_long")]
    RoleTooLong,
    #[error("feedback.message_empty")]
    MessageEmpty,
    #[error("feedback.message_too_long")]
    MessageTooLong,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
