use async_trait::async_trait;

/// Reports whether the backing document store is reachable right now.
///
/// Checkout and feedback refuse to start while offline so a submission is
/// never half-applied against a store that cannot be reached.
#[async_trait]
pub trait ConnectivityMonitor: Send + Sync {
    async fn is_online(&self) -> bool;
}
