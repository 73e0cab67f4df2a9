use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::cart::store::CartStore;
use crate::application::order::feed::OrderFeed;
use crate::application::order::submissions::SubmissionTracker;
use crate::domain::clock::Clock;
use crate::domain::connectivity::ConnectivityMonitor;
use crate::domain::logger::Logger;
use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::{NewOrder, OrderConfirmation, OrderEvent};
use crate::domain::order::pricing;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::{self, PriceVerifier};
use crate::domain::order::use_cases::place_order::PlaceOrderUseCase;
use crate::domain::rate_limit::service::RateLimitGuard;
use crate::domain::shared::value_objects::CurrentUser;

const PAY_ACTION: &str = "checkout_pay";
const PAY_COOLDOWN: Duration = Duration::from_secs(10);
const CONTEXT: &str = "CHECKOUT";

pub struct PlaceOrderUseCaseImpl {
    pub rate_limiter: Arc<dyn RateLimitGuard>,
    pub connectivity: Arc<dyn ConnectivityMonitor>,
    pub cart_store: Arc<CartStore>,
    pub verifier: Arc<dyn PriceVerifier>,
    pub orders: Arc<dyn OrderRepository>,
    pub feed: Arc<OrderFeed>,
    pub submissions: Arc<SubmissionTracker>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl PlaceOrderUseCaseImpl {
    /// The guarded part of checkout. Every early return leaves the cart
    /// exactly as it was; only confirmation ever clears it.
    async fn run_checkout(&self, user: &CurrentUser) -> Result<OrderConfirmation, CheckoutError> {
        self.rate_limiter
            .check_limit(&format!("{}:{}", PAY_ACTION, user.id), PAY_COOLDOWN)
            .await?;

        if !self.connectivity.is_online().await {
            return Err(CheckoutError::Offline);
        }

        let cart = self.cart_store.load(&user.id).await;
        if cart.is_empty() {
            return Err(CheckoutError::CartEmpty);
        }
        if pricing::breakdown(cart.subtotal()).total <= Decimal::ZERO {
            return Err(CheckoutError::InvalidTotal);
        }

        let verified = self.verifier.verify(cart.items()).await?;
        self.submissions.advance_to_submitting(&user.id).await;

        let order = self
            .orders
            .create(&NewOrder {
                user_id: user.id.clone(),
                user_email: user.email.clone(),
                items: verified.items.clone(),
                total: verified.pricing.total,
                token_number: services::generate_token_number(),
                created_at: self.clock.now(),
            })
            .await?;

        self.feed.publish(OrderEvent::Created(order.clone()));
        self.logger.info(
            CONTEXT,
            &format!("Order placed, pickup token {}.", order.token_number),
        );

        Ok(OrderConfirmation {
            order_id: order.id,
            token_number: order.token_number,
            items: verified.items,
            pricing: verified.pricing,
        })
    }
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, user: &CurrentUser) -> Result<OrderConfirmation, CheckoutError> {
        if !self.submissions.begin(&user.id).await {
            return Err(CheckoutError::AlreadyInProgress);
        }

        match self.run_checkout(user).await {
            Ok(confirmation) => {
                self.submissions
                    .succeed(&user.id, confirmation.order_id)
                    .await;
                Ok(confirmation)
            }
            Err(err) => {
                self.logger.error(
                    CONTEXT,
                    "Order submission failed.",
                    Some(&err.to_string()),
                );
                self.submissions.fail(&user.id, err.to_string()).await;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::{Order, OrderLine};
    use crate::domain::order::pricing::PriceBreakdown;
    use crate::domain::order::services::VerifiedOrder;
    use crate::domain::order::submission::SubmissionState;
    use crate::domain::order::value_objects::{OrderStatus, TokenNumber};
    use crate::domain::rate_limit::errors::RateLimitError;
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use crate::domain::storage::{KeyValueStorage, StorageError};
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::mock;
    use uuid::Uuid;

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
        pub Limiter {}

        #[async_trait]
        impl RateLimitGuard for Limiter {
            async fn check_limit(&self, action: &str, cooldown: Duration) -> Result<(), RateLimitError>;
        }
    }

    mock! {
        pub Connectivity {}

        #[async_trait]
        impl ConnectivityMonitor for Connectivity {
            async fn is_online(&self) -> bool;
        }
    }

    mock! {
        pub Verifier {}

        #[async_trait]
        impl PriceVerifier for Verifier {
            async fn verify(&self, items: &[CartItem]) -> Result<VerifiedOrder, CheckoutError>;
        }
    }

    mock! {
        pub Orders {}

        #[async_trait]
        impl OrderRepository for Orders {
            async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Option<Order>, RepositoryError>;
            async fn get_recent(&self, status: Option<OrderStatus>, limit: u32) -> Result<Vec<Order>, RepositoryError>;
            async fn update_status(&self, id: Uuid, status: OrderStatus) -> Result<(), RepositoryError>;
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
        logger.expect_info().returning(|_, _| ());
        logger.expect_warn().returning(|_, _| ());
        logger.expect_error().returning(|_, _, _| ());
        logger.expect_debug().returning(|_, _| ());
        Arc::new(logger)
    }

    fn buyer() -> CurrentUser {
        CurrentUser::new("uid-1", "sam@campus.edu")
    }

    fn saved_cart() -> Result<Option<String>, StorageError> {
        Ok(Some(
            r#"[{"id":"latte","name":"Latte","price":4.75,"quantity":2}]"#.to_string(),
        ))
    }

    fn verified_latte() -> VerifiedOrder {
        VerifiedOrder {
            items: vec![OrderLine {
                product_id: ProductId::new("latte"),
                name: "Latte".to_string(),
                price: Decimal::new(500, 2),
                quantity: 2,
            }],
            pricing: PriceBreakdown {
                subtotal: Decimal::new(1000, 2),
                tax: Decimal::new(80, 2),
                total: Decimal::new(1080, 2),
            },
        }
    }

    struct Fixture {
        limiter: MockLimiter,
        connectivity: MockConnectivity,
        storage: MockStorage,
        verifier: MockVerifier,
        orders: MockOrders,
    }

    impl Fixture {
        fn passing() -> Self {
            let mut limiter = MockLimiter::new();
            limiter.expect_check_limit().returning(|_, _| Ok(()));

            let mut connectivity = MockConnectivity::new();
            connectivity.expect_is_online().returning(|| true);

            let mut storage = MockStorage::new();
            storage.expect_get().returning(|_| saved_cart());

            let mut verifier = MockVerifier::new();
            verifier.expect_verify().returning(|_| Ok(verified_latte()));

            let mut orders = MockOrders::new();
            orders.expect_create().returning(|new_order| {
                Ok(Order {
                    id: Uuid::new_v4(),
                    user_id: new_order.user_id.clone(),
                    user_email: new_order.user_email.clone(),
                    items: new_order.items.clone(),
                    total: new_order.total,
                    status: OrderStatus::Pending,
                    token_number: new_order.token_number,
                    created_at: new_order.created_at,
                })
            });

            Fixture {
                limiter,
                connectivity,
                storage,
                verifier,
                orders,
            }
        }

        fn build(self) -> (PlaceOrderUseCaseImpl, Arc<SubmissionTracker>, Arc<OrderFeed>) {
            let submissions = Arc::new(SubmissionTracker::new());
            let feed = Arc::new(OrderFeed::new());
            let use_case = PlaceOrderUseCaseImpl {
                rate_limiter: Arc::new(self.limiter),
                connectivity: Arc::new(self.connectivity),
                cart_store: Arc::new(CartStore::new(Arc::new(self.storage), mock_logger())),
                verifier: Arc::new(self.verifier),
                orders: Arc::new(self.orders),
                feed: Arc::clone(&feed),
                submissions: Arc::clone(&submissions),
                clock: Arc::new(FixedClock(1_000_000)),
                logger: mock_logger(),
            };
            (use_case, submissions, feed)
        }
    }

    #[tokio::test]
    async fn should_place_order_with_verified_totals_and_four_digit_token() {
        let (use_case, submissions, feed) = Fixture::passing().build();
        let mut events = feed.subscribe();

        let confirmation = use_case.execute(&buyer()).await.unwrap();

        assert_eq!(confirmation.pricing.total, Decimal::new(1080, 2));
        assert_eq!(confirmation.items[0].price, Decimal::new(500, 2));
        assert!((1000..10000).contains(&confirmation.token_number.as_u32()));

        let event = events.recv().await.unwrap();
        assert_eq!(event.kind(), "created");
        assert_eq!(event.order().status, OrderStatus::Pending);

        assert_eq!(
            submissions.state(&buyer().id).await,
            SubmissionState::Succeeded {
                order_id: confirmation.order_id
            }
        );
    }

    #[tokio::test]
    async fn should_reject_rate_limited_attempt_before_any_catalog_or_order_io() {
        let mut fixture = Fixture::passing();
        fixture.limiter = MockLimiter::new();
        fixture.limiter.expect_check_limit().returning(|_, _| {
            Err(RateLimitError::TooManyAttempts {
                retry_in_seconds: 7,
            })
        });
        fixture.connectivity = MockConnectivity::new();
        fixture.connectivity.expect_is_online().times(0);
        fixture.verifier = MockVerifier::new();
        fixture.verifier.expect_verify().times(0);
        fixture.orders = MockOrders::new();
        fixture.orders.expect_create().times(0);

        let (use_case, submissions, _) = fixture.build();
        let err = use_case.execute(&buyer()).await.unwrap_err();

        assert!(matches!(err, CheckoutError::RateLimited(_)));
        assert_eq!(
            submissions.state(&buyer().id).await,
            SubmissionState::Failed {
                reason: "rate_limit.too_many_attempts".to_string()
            }
        );
    }

    #[tokio::test]
    async fn should_scope_cooldown_bucket_to_the_buyer() {
        let mut fixture = Fixture::passing();
        fixture.limiter = MockLimiter::new();
        fixture
            .limiter
            .expect_check_limit()
            .withf(|action, cooldown| {
                action == "checkout_pay:uid-1" && *cooldown == Duration::from_secs(10)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let (use_case, _, _) = fixture.build();
        use_case.execute(&buyer()).await.unwrap();
    }

    #[tokio::test]
    async fn should_abort_when_offline() {
        let mut fixture = Fixture::passing();
        fixture.connectivity = MockConnectivity::new();
        fixture.connectivity.expect_is_online().returning(|| false);
        fixture.verifier = MockVerifier::new();
        fixture.verifier.expect_verify().times(0);
        fixture.orders = MockOrders::new();
        fixture.orders.expect_create().times(0);

        let (use_case, _, _) = fixture.build();
        let err = use_case.execute(&buyer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Offline));
    }

    #[tokio::test]
    async fn should_abort_empty_cart_before_verification() {
        let mut fixture = Fixture::passing();
        fixture.storage = MockStorage::new();
        fixture.storage.expect_get().returning(|_| Ok(None));
        fixture.verifier = MockVerifier::new();
        fixture.verifier.expect_verify().times(0);
        fixture.orders = MockOrders::new();
        fixture.orders.expect_create().times(0);

        let (use_case, _, _) = fixture.build();
        let err = use_case.execute(&buyer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::CartEmpty));
    }

    #[tokio::test]
    async fn should_abort_when_displayed_total_is_not_positive() {
        let mut fixture = Fixture::passing();
        fixture.storage = MockStorage::new();
        fixture.storage.expect_get().returning(|_| {
            Ok(Some(
                r#"[{"id":"comp","name":"Comped Drink","price":0.0,"quantity":1}]"#.to_string(),
            ))
        });
        fixture.verifier = MockVerifier::new();
        fixture.verifier.expect_verify().times(0);

        let (use_case, _, _) = fixture.build();
        let err = use_case.execute(&buyer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidTotal));
    }

    #[tokio::test]
    async fn should_leave_cart_untouched_when_verification_fails() {
        let mut fixture = Fixture::passing();
        fixture.verifier = MockVerifier::new();
        fixture.verifier.expect_verify().returning(|_| {
            Err(CheckoutError::ProductVanished {
                name: "Latte".to_string(),
            })
        });
        fixture.orders = MockOrders::new();
        fixture.orders.expect_create().times(0);
        // The storage mock only expects reads; a clear or rewrite would panic.
        fixture.storage = MockStorage::new();
        fixture.storage.expect_get().returning(|_| saved_cart());

        let (use_case, submissions, _) = fixture.build();
        let err = use_case.execute(&buyer()).await.unwrap_err();

        assert!(matches!(err, CheckoutError::ProductVanished { .. }));
        assert_eq!(
            submissions.state(&buyer().id).await,
            SubmissionState::Failed {
                reason: "checkout.product_vanished".to_string()
            }
        );
    }

    #[tokio::test]
    async fn should_refuse_concurrent_submission_by_same_user() {
        let (use_case, submissions, _) = Fixture::passing().build();

        // Simulate an attempt already past its guards.
        assert!(submissions.begin(&buyer().id).await);

        let err = use_case.execute(&buyer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::AlreadyInProgress));
        // The in-flight attempt's state is not clobbered by the refusal.
        assert!(submissions.state(&buyer().id).await.is_in_flight());
    }

    #[tokio::test]
    async fn should_fail_submission_when_order_write_fails() {
        let mut fixture = Fixture::passing();
        fixture.orders = MockOrders::new();
        fixture
            .orders
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let (use_case, submissions, feed) = fixture.build();
        let events = feed.subscribe();

        let err = use_case.execute(&buyer()).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Repository(_)));
        assert_eq!(
            submissions.state(&buyer().id).await,
            SubmissionState::Failed {
                reason: "repository.persistence".to_string()
            }
        );
        drop(events);
    }
}
