//! Weather History Service - Backend
//!
//! Serves same-day weather statistics across a decade of daily archives,
//! plus the city catalog and a contact form.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
use error::AppError;
use services::ArchiveStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub archives: Arc<ArchiveStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let archives = ArchiveStore::new(&config.data.dir, config.data.cache);
        Self {
            archives: Arc::new(archives),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api", routes::api_routes())
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Weather History API v1.0"
}

/// Fallback for unknown routes
async fn not_found() -> AppError {
    AppError::NotFound("Route".to_string())
}
