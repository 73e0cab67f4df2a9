use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::rate_limit::errors::RateLimitError;
use crate::domain::rate_limit::service::RateLimitGuard;
use crate::domain::storage::KeyValueStorage;

const KEY_PREFIX: &str = "ratelimit_";
const CONTEXT: &str = "RATE_LIMIT";

/// Cooldown guard backed by the key/value store.
///
/// One record per action holding the epoch milliseconds of the last permit.
/// Storage trouble and unreadable records fail open: throttling is a
/// convenience, refusing service over it would hurt more than it protects.
pub struct StorageRateLimiter {
    pub storage: Arc<dyn KeyValueStorage>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RateLimitGuard for StorageRateLimiter {
    async fn check_limit(&self, action: &str, cooldown: Duration) -> Result<(), RateLimitError> {
        let key = format!("{}{}", KEY_PREFIX, action);
        let now = self.clock.now_millis();

        let last = match self.storage.get(&key).await {
            Ok(value) => value.and_then(|raw| raw.parse::<i64>().ok()),
            Err(err) => {
                self.logger.warn(
                    CONTEXT,
                    &format!("Could not read cooldown record, letting the action pass. {}", err),
                );
                None
            }
        };

        if let Some(last) = last {
            let cooldown_ms = cooldown.as_millis() as i64;
            let elapsed = now - last;
            if elapsed < cooldown_ms {
                let retry_in_seconds = ((cooldown_ms - elapsed + 999) / 1000) as u64;
                return Err(RateLimitError::TooManyAttempts { retry_in_seconds });
            }
        }

        if let Err(err) = self.storage.set(&key, &now.to_string()).await {
            self.logger.warn(
                CONTEXT,
                &format!("Could not record the new cooldown window. {}", err),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::StorageError;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub Storage {}

        #[async_trait]
        impl KeyValueStorage for Storage {
            async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
            async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
            async fn remove(&self, key: &str) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, context: &str, message: &str);
            fn warn(&self, context: &str, message: &str);
            fn error<'a>(&self, context: &str, message: &str, details: Option<&'a str>);
            fn debug(&self, context: &str, message: &str);
        }
    }

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(self.0).unwrap()
        }
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_warn().returning(|_, _| ());
        Arc::new(logger)
    }

    fn limiter(storage: MockStorage, now_ms: i64) -> StorageRateLimiter {
        StorageRateLimiter {
            storage: Arc::new(storage),
            clock: Arc::new(FixedClock(now_ms)),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_permit_and_record_when_no_prior_attempt() {
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .with(eq("ratelimit_checkout_pay:uid-1"))
            .returning(|_| Ok(None));
        storage
            .expect_set()
            .with(eq("ratelimit_checkout_pay:uid-1"), eq("50000"))
            .times(1)
            .returning(|_, _| Ok(()));

        let result = limiter(storage, 50_000)
            .check_limit("checkout_pay:uid-1", Duration::from_secs(10))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_report_remaining_seconds_rounded_up() {
        let mut storage = MockStorage::new();
        // 3 seconds into a 10 second cooldown.
        storage
            .expect_get()
            .returning(|_| Ok(Some("47000".to_string())));
        storage.expect_set().times(0);

        let result = limiter(storage, 50_000)
            .check_limit("checkout_pay:uid-1", Duration::from_secs(10))
            .await;
        let err = result.unwrap_err();
        assert_eq!(err.retry_in_seconds(), 7);
    }

    #[tokio::test]
    async fn should_never_report_zero_seconds_while_still_limited() {
        let mut storage = MockStorage::new();
        // 1 millisecond of cooldown left.
        storage
            .expect_get()
            .returning(|_| Ok(Some("40001".to_string())));
        storage.expect_set().times(0);

        let result = limiter(storage, 50_000)
            .check_limit("checkout_pay:uid-1", Duration::from_secs(10))
            .await;
        assert_eq!(result.unwrap_err().retry_in_seconds(), 1);
    }

    #[tokio::test]
    async fn should_permit_again_once_cooldown_has_fully_elapsed() {
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .returning(|_| Ok(Some("40000".to_string())));
        storage.expect_set().times(1).returning(|_, _| Ok(()));

        let result = limiter(storage, 50_000)
            .check_limit("checkout_pay:uid-1", Duration::from_secs(10))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_open_when_record_is_unreadable() {
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .returning(|_| Ok(Some("not-a-number".to_string())));
        storage.expect_set().times(1).returning(|_, _| Ok(()));

        let result = limiter(storage, 50_000)
            .check_limit("checkout_pay:uid-1", Duration::from_secs(10))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_open_when_storage_read_fails() {
        let mut storage = MockStorage::new();
        storage
            .expect_get()
            .returning(|_| Err(StorageError::Unavailable));
        storage.expect_set().times(1).returning(|_, _| Ok(()));

        let result = limiter(storage, 50_000)
            .check_limit("checkout_pay:uid-1", Duration::from_secs(10))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_permit_even_when_new_window_cannot_be_recorded() {
        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        storage
            .expect_set()
            .returning(|_, _| Err(StorageError::QuotaExceeded));

        let result = limiter(storage, 50_000)
            .check_limit("feedback_submit:uid-1", Duration::from_secs(60))
            .await;
        assert!(result.is_ok());
    }
}
