use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::set_quantity::{SetCartQuantityParams, SetCartQuantityUseCase};

pub struct SetCartQuantityUseCaseImpl {
    pub store: Arc<CartStore>,
}

#[async_trait]
impl SetCartQuantityUseCase for SetCartQuantityUseCaseImpl {
    async fn execute(&self, params: SetCartQuantityParams) -> Cart {
        let mut cart = self.store.load(&params.user_id).await;
        cart.set_quantity(&params.product_id, params.quantity);
        self.store.persist(&params.user_id, &cart).await;
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logger::Logger;
    use crate::domain::shared::value_objects::{ProductId, UserId};
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

    fn use_case(storage: MockStorage) -> SetCartQuantityUseCaseImpl {
        let mut logger = MockLog::new();
        logger.expect_warn().returning(|_, _| ());
        logger.expect_error().returning(|_, _, _| ());
        SetCartQuantityUseCaseImpl {
            store: Arc::new(CartStore::new(Arc::new(storage), Arc::new(logger))),
        }
    }

    fn saved_latte() -> Result<Option<String>, StorageError> {
        Ok(Some(
            r#"[{"id":"latte","name":"Latte","price":4.75,"quantity":2}]"#.to_string(),
        ))
    }

    #[tokio::test]
    async fn should_replace_quantity() {
        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| saved_latte());
        storage
            .expect_set()
            .withf(|_, value| value.contains(r#""quantity":5"#))
            .times(1)
            .returning(|_, _| Ok(()));

        let cart = use_case(storage)
            .execute(SetCartQuantityParams {
                user_id: UserId::new("uid-1"),
                product_id: ProductId::new("latte"),
                quantity: 5,
            })
            .await;
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_remove_line_when_quantity_drops_below_one() {
        let mut storage = MockStorage::new();
        storage.expect_get().returning(|_| saved_latte());
        storage
            .expect_set()
            .withf(|_, value| value == "[]")
            .times(1)
            .returning(|_, _| Ok(()));

        let cart = use_case(storage)
            .execute(SetCartQuantityParams {
                user_id: UserId::new("uid-1"),
                product_id: ProductId::new("latte"),
                quantity: 0,
            })
            .await;
        assert!(cart.is_empty());
    }
}
