use std::time::Duration;

use async_trait::async_trait;

use super::errors::RateLimitError;

/// Cooldown guard for abuse-prone actions.
///
/// An action name identifies one cooldown bucket; flows scope the name per
/// user (for example `checkout_pay:<uid>`). This is anti-spam throttling, not
/// mutual exclusion: concurrent callers racing the same bucket may all pass.
#[async_trait]
pub trait RateLimitGuard: Send + Sync {
    /// Permits the action and starts a new cooldown window, or reports how
    /// long the caller still has to wait.
    async fn check_limit(&self, action: &str, cooldown: Duration) -> Result<(), RateLimitError>;
}
