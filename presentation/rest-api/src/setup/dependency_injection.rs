use std::sync::Arc;

use logger::TracingLogger;
use persistence::connectivity::PgConnectivityMonitor;
use persistence::feedback::repository::FeedbackRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductCatalogPostgres;
use storage::system_clock::SystemClock;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear_cart::ClearCartUseCaseImpl;
use business::application::cart::close_cart::CloseCartUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::open_cart::OpenCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::set_quantity::SetCartQuantityUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::feedback::submit::SubmitFeedbackUseCaseImpl;
use business::application::order::confirm_order::ConfirmOrderUseCaseImpl;
use business::application::order::feed::OrderFeed;
use business::application::order::list_orders::ListOrdersUseCaseImpl;
use business::application::order::place_order::PlaceOrderUseCaseImpl;
use business::application::order::submissions::SubmissionTracker;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::order::verify_prices::CatalogPriceVerifier;
use business::application::product::export_menu::ExportMenuUseCaseImpl;
use business::application::product::get_menu::GetMenuUseCaseImpl;
use business::application::product::seed_menu::SeedMenuUseCaseImpl;
use business::application::rate_limit::limiter::StorageRateLimiter;
use business::domain::storage::KeyValueStorage;

use crate::config::identity_config::AdminPolicy;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub menu_api: crate::api::menu::routes::MenuApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub orders_api: crate::api::orders::routes::OrdersApi,
    pub feedback_api: crate::api::feedback::routes::FeedbackApi,
}

impl DependencyContainer {
    pub async fn new(
        pool: sqlx::PgPool,
        store: Arc<dyn KeyValueStorage>,
        admins: Arc<AdminPolicy>,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let clock = Arc::new(SystemClock);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_catalog = Arc::new(ProductCatalogPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let feedback_repository = Arc::new(FeedbackRepositoryPostgres::new(pool.clone()));
        let connectivity = Arc::new(PgConnectivityMonitor::new(pool));

        // Shared application services
        let cart_store = Arc::new(CartStore::new(store.clone(), logger.clone()));
        let rate_limiter = Arc::new(StorageRateLimiter {
            storage: store.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let verifier = Arc::new(CatalogPriceVerifier {
            catalog: product_catalog.clone(),
            logger: logger.clone(),
        });
        let feed = Arc::new(OrderFeed::new());
        let submissions = Arc::new(SubmissionTracker::new());

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: cart_store.clone(),
        });
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            store: cart_store.clone(),
        });
        let set_quantity_use_case = Arc::new(SetCartQuantityUseCaseImpl {
            store: cart_store.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            store: cart_store.clone(),
            logger: logger.clone(),
        });
        let open_cart_use_case = Arc::new(OpenCartUseCaseImpl {
            store: cart_store.clone(),
        });
        let close_cart_use_case = Arc::new(CloseCartUseCaseImpl {
            store: cart_store.clone(),
        });

        // Menu use cases
        let get_menu_use_case = Arc::new(GetMenuUseCaseImpl {
            catalog: product_catalog.clone(),
            storage: store,
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let seed_menu_use_case = Arc::new(SeedMenuUseCaseImpl {
            catalog: product_catalog.clone(),
            logger: logger.clone(),
        });
        let export_menu_use_case = Arc::new(ExportMenuUseCaseImpl {
            catalog: product_catalog,
            logger: logger.clone(),
        });

        // Checkout use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            rate_limiter: rate_limiter.clone(),
            connectivity: connectivity.clone(),
            cart_store: cart_store.clone(),
            verifier,
            orders: order_repository.clone(),
            feed: feed.clone(),
            submissions: submissions.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let confirm_order_use_case = Arc::new(ConfirmOrderUseCaseImpl {
            orders: order_repository.clone(),
            cart_store,
            submissions: submissions.clone(),
            logger: logger.clone(),
        });

        // Order dashboard use cases
        let list_orders_use_case = Arc::new(ListOrdersUseCaseImpl {
            orders: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            orders: order_repository,
            feed: feed.clone(),
            logger: logger.clone(),
        });

        // Feedback use cases
        let submit_feedback_use_case = Arc::new(SubmitFeedbackUseCaseImpl {
            rate_limiter,
            connectivity,
            repository: feedback_repository,
            clock,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(clear_cart_use_case.clone());

        let menu_api = crate::api::menu::routes::MenuApi::new(
            get_menu_use_case,
            seed_menu_use_case,
            export_menu_use_case,
            admins.clone(),
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_item_use_case,
            remove_item_use_case,
            set_quantity_use_case,
            clear_cart_use_case,
            open_cart_use_case,
            close_cart_use_case,
        );

        let checkout_api = crate::api::checkout::routes::CheckoutApi::new(
            place_order_use_case,
            confirm_order_use_case,
            submissions,
        );

        let orders_api = crate::api::orders::routes::OrdersApi::new(
            list_orders_use_case,
            update_status_use_case,
            feed,
            admins,
        );

        let feedback_api =
            crate::api::feedback::routes::FeedbackApi::new(submit_feedback_use_case);

        Ok(Self {
            health_api,
            auth_api,
            menu_api,
            cart_api,
            checkout_api,
            orders_api,
            feedback_api,
        })
    }
}
