//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// Root endpoint
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Weather API".to_string(),
    })
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    // Check database connectivity
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.db).await {
        tracing::error!("Health check failed: {}", e);
        return Err(AppError::Internal("System unhealthy".to_string()));
    }

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: "connected".to_string(),
    }))
}
