use tokio::sync::broadcast;

use crate::domain::order::model::OrderEvent;

const FEED_CAPACITY: usize = 64;

/// In-process broadcast of order events for the kitchen display.
///
/// Subscribing is holding a receiver; dropping it is the cancellation. A
/// publish with nobody listening is not an error.
pub struct OrderFeed {
    sender: broadcast::Sender<OrderEvent>,
}

impl OrderFeed {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(FEED_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: OrderEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for OrderFeed {
    fn default() -> Self {
        Self::new()
    }
}
