use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::order::submission::SubmissionState;
use crate::domain::shared::value_objects::UserId;

/// Per-user checkout state machines.
///
/// Holds the machine across requests so the storefront can poll where its
/// submission stands, and so a second submit while one is in flight is
/// refused no matter how the buttons race.
#[derive(Default)]
pub struct SubmissionTracker {
    states: RwLock<HashMap<UserId, SubmissionState>>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn begin(&self, user_id: &UserId) -> bool {
        let mut states = self.states.write().await;
        states.entry(user_id.clone()).or_default().begin()
    }

    pub async fn advance_to_submitting(&self, user_id: &UserId) {
        let mut states = self.states.write().await;
        states
            .entry(user_id.clone())
            .or_default()
            .advance_to_submitting();
    }

    pub async fn succeed(&self, user_id: &UserId, order_id: Uuid) {
        let mut states = self.states.write().await;
        states.entry(user_id.clone()).or_default().succeed(order_id);
    }

    pub async fn fail(&self, user_id: &UserId, reason: impl Into<String>) {
        let mut states = self.states.write().await;
        states.entry(user_id.clone()).or_default().fail(reason);
    }

    pub async fn reset(&self, user_id: &UserId) {
        let mut states = self.states.write().await;
        states.entry(user_id.clone()).or_default().reset();
    }

    pub async fn state(&self, user_id: &UserId) -> SubmissionState {
        let states = self.states.read().await;
        states.get(user_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_start_every_user_at_idle() {
        let tracker = SubmissionTracker::new();
        assert_eq!(
            tracker.state(&UserId::new("uid-1")).await,
            SubmissionState::Idle
        );
    }

    #[tokio::test]
    async fn should_track_users_independently() {
        let tracker = SubmissionTracker::new();
        let first = UserId::new("uid-1");
        let second = UserId::new("uid-2");

        assert!(tracker.begin(&first).await);
        assert!(tracker.begin(&second).await);
        assert!(!tracker.begin(&first).await);

        tracker.fail(&first, "checkout.offline").await;
        assert!(tracker.state(&second).await.is_in_flight());
    }

    #[tokio::test]
    async fn should_walk_machine_through_success_and_reset() {
        let tracker = SubmissionTracker::new();
        let user = UserId::new("uid-1");
        let order_id = Uuid::new_v4();

        assert!(tracker.begin(&user).await);
        tracker.advance_to_submitting(&user).await;
        tracker.succeed(&user, order_id).await;

        assert_eq!(
            tracker.state(&user).await,
            SubmissionState::Succeeded { order_id }
        );

        tracker.reset(&user).await;
        assert_eq!(tracker.state(&user).await, SubmissionState::Idle);
    }
}
