use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::open_cart::OpenCartUseCase;
use crate::domain::shared::value_objects::UserId;

pub struct OpenCartUseCaseImpl {
    pub store: Arc<CartStore>,
}

#[async_trait]
impl OpenCartUseCase for OpenCartUseCaseImpl {
    async fn execute(&self, user_id: &UserId) -> Cart {
        self.store.set_drawer_open(user_id, true).await;
        self.store.load(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logger::Logger;
    use crate::domain::storage::{KeyValueStorage, StorageError};
    use mockall::mock;

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

    #[tokio::test]
    async fn should_open_the_drawer() {
        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| Ok(None));
        let mut logger = MockLog::new();
        logger.expect_warn().returning(|_, _| ());
        logger.expect_error().returning(|_, _, _| ());

        let use_case = OpenCartUseCaseImpl {
            store: Arc::new(CartStore::new(Arc::new(storage), Arc::new(logger))),
        };

        let cart = use_case.execute(&UserId::new("uid-1")).await;
        assert!(cart.is_open());
    }
}
