use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::list_orders::{ListOrdersParams, ListOrdersUseCase};

const MAX_WINDOW: u32 = 100;

pub struct ListOrdersUseCaseImpl {
    pub orders: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListOrdersUseCase for ListOrdersUseCaseImpl {
    async fn execute(&self, params: ListOrdersParams) -> Result<Vec<Order>, OrderError> {
        let limit = params.limit.unwrap_or(MAX_WINDOW).clamp(1, MAX_WINDOW);
        let orders = self.orders.get_recent(params.status, limit).await?;
        self.logger
            .debug("ORDERS", &format!("Fetched {} recent orders.", orders.len()));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::NewOrder;
    use crate::domain::order::value_objects::OrderStatus;
    use mockall::mock;
    use uuid::Uuid;

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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_, _| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_default_to_a_hundred_record_window() {
        let mut orders = MockOrders::new();
        orders
            .expect_get_recent()
            .withf(|status, limit| status.is_none() && *limit == 100)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let use_case = ListOrdersUseCaseImpl {
            orders: Arc::new(orders),
            logger: mock_logger(),
        };
        use_case
            .execute(ListOrdersParams {
                status: None,
                limit: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_cap_requested_window_at_a_hundred() {
        let mut orders = MockOrders::new();
        orders
            .expect_get_recent()
            .withf(|_, limit| *limit == 100)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let use_case = ListOrdersUseCaseImpl {
            orders: Arc::new(orders),
            logger: mock_logger(),
        };
        use_case
            .execute(ListOrdersParams {
                status: None,
                limit: Some(5000),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn should_pass_status_filter_through() {
        let mut orders = MockOrders::new();
        orders
            .expect_get_recent()
            .withf(|status, limit| *status == Some(OrderStatus::Pending) && *limit == 25)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let use_case = ListOrdersUseCaseImpl {
            orders: Arc::new(orders),
            logger: mock_logger(),
        };
        use_case
            .execute(ListOrdersParams {
                status: Some(OrderStatus::Pending),
                limit: Some(25),
            })
            .await
            .unwrap();
    }
}
