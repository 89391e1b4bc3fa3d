//! Route definitions for the weather fire-risk API

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/cities", get(handlers::list_cities))
        .route("/init", put(handlers::initialize_database))
        .nest("/weather", weather_routes())
}

/// Weather analytics and fire danger routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/extremes/:city/:parameter", get(handlers::get_extremes))
        .route("/average/:city/:parameter", get(handlers::get_average))
        .route("/fire-danger/:city", get(handlers::get_fire_danger))
        .route("/high-fire-risk/:city", get(handlers::get_high_fire_risk))
}
