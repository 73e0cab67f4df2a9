#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    /// The action is still cooling down. Carries the whole seconds left,
    /// rounded up so "wait 1 more second" never shows as zero.
    #[error("rate_limit.too_many_attempts")]
    TooManyAttempts { retry_in_seconds: u64 },
}

impl RateLimitError {
    pub fn retry_in_seconds(&self) -> u64 {
        match self {
            RateLimitError::TooManyAttempts { retry_in_seconds } => *retry_in_seconds,
        }
    }
}
