//! HTTP handlers for locations

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::services::LocationService;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

/// Get the list of available cities
pub async fn list_cities(State(state): State<AppState>) -> AppResult<Json<CitiesResponse>> {
    let service = LocationService::new(state.db);
    let cities = service.list_cities().await?;

    if cities.is_empty() {
        return Err(AppError::NotFound("Cities".to_string()));
    }

    Ok(Json(CitiesResponse { cities }))
}
