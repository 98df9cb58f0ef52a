//! Order Desk server - customers/orders CRUD API.
//!
//! # Architecture
//!
//! - Axum web framework serving REST-over-JSON
//! - SQLite (via sqlx) as the single source of truth
//! - Store-enforced foreign keys between orders and customers
//!
//! The schema is bootstrapped at startup, before the listener binds, so a
//! missing database file is created and populated on first run.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod config;
mod db;
mod error;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "order_desk_server=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Initialize database connection pool (creates the file if missing)
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Bootstrap the schema before accepting connections
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");
    tracing::info!("Database schema ready");

    // Build application state and router
    let state = AppState::new(pool);
    let app = routes::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("order-desk listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
