//! Route definitions for the weather history service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
        .route("/contact", post(handlers::submit_contact))
}

/// Weather statistics and city catalog routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(handlers::get_weather_statistics))
        .route("/cities", get(handlers::list_cities))
}
