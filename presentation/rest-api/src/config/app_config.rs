use std::sync::Arc;

use poem::middleware::Cors;

use super::{cors_config, identity_config::AdminPolicy, server_config::ServerConfig};

/// Startup configuration resolved once from the environment.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub admins: Arc<AdminPolicy>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            admins: Arc::new(AdminPolicy::from_env()),
        }
    }
}
