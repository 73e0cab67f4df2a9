use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::storage::KeyValueStorage;

const CART_KEY_PREFIX: &str = "cart_";
const CONTEXT: &str = "CART";

/// Binds the cart aggregate to durable storage, one record per user.
///
/// Storage trouble never breaks a cart flow: unreadable records load as an
/// empty cart and failed writes are logged and swallowed. Only the item list
/// is persisted; the drawer flag is session state, tracked in memory and
/// gone on restart.
pub struct CartStore {
    storage: Arc<dyn KeyValueStorage>,
    logger: Arc<dyn Logger>,
    open_drawers: RwLock<HashSet<UserId>>,
}

impl CartStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, logger: Arc<dyn Logger>) -> Self {
        Self {
            storage,
            logger,
            open_drawers: RwLock::new(HashSet::new()),
        }
    }

    fn key(user_id: &UserId) -> String {
        format!("{}{}", CART_KEY_PREFIX, user_id)
    }

    pub async fn load(&self, user_id: &UserId) -> Cart {
        let mut cart = self.load_items(user_id).await;
        if self.open_drawers.read().await.contains(user_id) {
            cart.open();
        }
        cart
    }

    async fn load_items(&self, user_id: &UserId) -> Cart {
        let raw = match self.storage.get(&Self::key(user_id)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::default(),
            Err(err) => {
                self.logger.error(
                    CONTEXT,
                    "Could not read the saved cart, starting empty.",
                    Some(&err.to_string()),
                );
                return Cart::default();
            }
        };

        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) => Cart::from_items(items),
            Err(err) => {
                self.logger.warn(
                    CONTEXT,
                    &format!("Saved cart was unreadable, starting empty. {}", err),
                );
                Cart::default()
            }
        }
    }

    pub async fn persist(&self, user_id: &UserId, cart: &Cart) {
        self.set_drawer_open(user_id, cart.is_open()).await;

        let raw = match serde_json::to_string(cart.items()) {
            Ok(raw) => raw,
            Err(err) => {
                self.logger.error(
                    CONTEXT,
                    "Could not encode the cart for saving.",
                    Some(&err.to_string()),
                );
                return;
            }
        };

        if let Err(err) = self.storage.set(&Self::key(user_id), &raw).await {
            self.logger.error(
                CONTEXT,
                "Could not save the cart.",
                Some(&err.to_string()),
            );
        }
    }

    pub async fn set_drawer_open(&self, user_id: &UserId, open: bool) {
        let mut drawers = self.open_drawers.write().await;
        if open {
            drawers.insert(user_id.clone());
        } else {
            drawers.remove(user_id);
        }
    }

    pub async fn clear(&self, user_id: &UserId) {
        self.set_drawer_open(user_id, false).await;

        if let Err(err) = self.storage.remove(&Self::key(user_id)).await {
            self.logger.error(
                CONTEXT,
                "Could not remove the saved cart.",
                Some(&err.to_string()),
            );
        }
    }
}
