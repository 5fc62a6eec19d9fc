//! Vehicle Quote Service - API Server Binary
//!
//! This binary starts the HTTP API server for the quote service.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory store
//! cargo run --bin quote-api
//!
//! # Run against PostgreSQL
//! API_STORAGE=postgres API_DATABASE_URL=postgres://... cargo run --bin quote-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_STORAGE` - `memory` or `postgres` (default: memory)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_MAX_CONNECTIONS` - PostgreSQL pool size (default: 10)
//! * `API_VERSION` - Version label reported by `/health`

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_customer::{CustomerService, CustomerStore, InMemoryCustomerStore};
use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresCustomerStore};
use interface_api::{
    config::{ApiConfig, StorageBackend},
    create_router,
};

/// Main entry point for the API server.
///
/// Loads configuration, initializes logging, builds the configured store,
/// and serves until Ctrl+C or SIGTERM.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;
    config.validate()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = ?config.storage,
        version = %config.version,
        "Starting quote API server"
    );

    let store = build_store(&config).await?;
    let app = create_router(CustomerService::new(store), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Builds the customer store selected by the configuration.
///
/// The postgres backend connects and applies pending migrations first.
async fn build_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn CustomerStore>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory customer store; records are lost on restart");
            Ok(Arc::new(InMemoryCustomerStore::new()))
        }
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = create_pool(
                DatabaseConfig::new(config.database_url.clone())
                    .max_connections(config.max_connections),
            )
            .await
            .context("Failed to connect to database")?;

            tracing::info!("Running database migrations...");
            run_migrations(&pool)
                .await
                .context("Failed to apply migrations")?;

            tracing::info!("Database ready");
            Ok(Arc::new(PostgresCustomerStore::new(pool)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
