//! HTTP handlers for fire danger endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::FireDangerReport;
use crate::services::FireDangerService;
use crate::AppState;
use shared::validation::is_storable_city_name;

#[derive(Debug, Serialize)]
pub struct FireDangerResponse {
    pub city: String,
    pub fire_danger_ratings: Vec<FireDangerReport>,
}

#[derive(Debug, Serialize)]
pub struct HighRiskResponse {
    pub city: String,
    pub high_risk_days: Vec<FireDangerReport>,
}

/// Get fire danger ratings for every stored day in a city
pub async fn get_fire_danger(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<FireDangerResponse>> {
    let ratings = if is_storable_city_name(&city) {
        FireDangerService::new(state.db)
            .get_fire_danger_by_date(&city)
            .await?
    } else {
        Vec::new()
    };

    if ratings.is_empty() {
        return Err(AppError::NotFound(format!("Weather data for {}", city)));
    }

    Ok(Json(FireDangerResponse {
        city,
        fire_danger_ratings: ratings,
    }))
}

/// Get only the High and Extreme fire danger days in a city
pub async fn get_high_fire_risk(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> AppResult<Json<HighRiskResponse>> {
    let days = if is_storable_city_name(&city) {
        FireDangerService::new(state.db)
            .get_high_risk_days(&city)
            .await?
    } else {
        Vec::new()
    };

    if days.is_empty() {
        return Err(AppError::NotFound(format!("High risk days for {}", city)));
    }

    Ok(Json(HighRiskResponse {
        city,
        high_risk_days: days,
    }))
}
