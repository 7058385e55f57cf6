//! Application builder: wires router, middleware and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use adminhub_core::config::{AppConfig, DatabaseProvider};
use adminhub_core::error::AppError;
use adminhub_database::{DatabasePool, Stores};
use adminhub_i18n::MessageCatalog;
use adminhub_storage::LocalStorageProvider;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let body_limit = state.config.server.body_limit_bytes;

    build_router(state)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the AdminHub server until Ctrl+C.
///
/// Missing or malformed message bundles abort startup.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting AdminHub server...");

    // ── Step 1: Message bundles ──────────────────────────────────
    let messages = MessageCatalog::load(&config.i18n.locales_dir)?;

    // ── Step 2: Stores ───────────────────────────────────────────
    let (stores, pool) = match config.database.provider {
        DatabaseProvider::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                adminhub_database::migration::run_migrations(pool.pool()).await?;
            }
            (Stores::postgres(&pool), Some(pool))
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on restart");
            (Stores::memory(), None)
        }
    };

    // ── Step 3: File storage ─────────────────────────────────────
    let storage = Arc::new(LocalStorageProvider::new(config.storage.storage_root()).await?);

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, stores, storage, messages);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("AdminHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("AdminHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}
