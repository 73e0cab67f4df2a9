use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod tags;

    pub mod auth {
        pub mod dto;
        pub mod routes;
    }
    pub mod cart {
        pub mod dto;
        pub mod routes;
    }
    pub mod checkout {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod feedback {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod menu {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod orders {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}

mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod identity_config;
    pub mod server_config;
    pub mod storage_config;
}

mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config, storage_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point.
///
/// Initializes the application, wires dependencies, and starts the HTTP
/// server. The layout separates concerns per directory:
/// - config/: environment-driven configuration (server, CORS, database,
///   Firebase project, admin allowlist, storage)
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mappers
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let config = AppConfig::from_env();

    let pool = database_config::init_database().await?;
    let store = storage_config::init_storage().await;

    let container = DependencyContainer::new(pool, store, config.admins.clone()).await?;

    Server::run(config, container).await?;

    Ok(())
}
