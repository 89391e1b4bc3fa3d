//! Database initialization handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::db;
use crate::error::AppResult;
use crate::external::TimelineClient;
use crate::services::{IngestionService, IngestionSummary};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub message: String,
    pub import: IngestionSummary,
}

/// Create the schema if needed, then import the configured location's timeline
pub async fn initialize_database(State(state): State<AppState>) -> AppResult<Json<InitResponse>> {
    db::migrate(&state.db).await?;

    let weather_api = &state.config.weather_api;
    let client = TimelineClient::new(weather_api)?;
    let service = IngestionService::with_client(state.db.clone(), client);
    let summary = service
        .run(&weather_api.location, &weather_api.period)
        .await?;

    tracing::info!("Database initialization completed");

    Ok(Json(InitResponse {
        message: "Database initialization completed successfully".to_string(),
        import: summary,
    }))
}
