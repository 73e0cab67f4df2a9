use async_trait::async_trait;
use business::domain::connectivity::ConnectivityMonitor;
use sqlx::PgPool;
use tracing::warn;

/// Reports the service online while the database answers a trivial probe.
/// Checkout and feedback refuse to start work when this returns false so
/// users get an immediate "offline" answer instead of a slow failure.
pub struct PgConnectivityMonitor {
    pool: PgPool,
}

impl PgConnectivityMonitor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectivityMonitor for PgConnectivityMonitor {
    async fn is_online(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(err) => {
                warn!(target: "cafe_api", "[CONNECTIVITY] probe failed: {err}");
                false
            }
        }
    }
}
