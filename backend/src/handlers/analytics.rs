//! HTTP handlers for weather analytics endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::validation::{is_storable_city_name, parse_date_range};

use crate::error::{AppError, AppResult};
use crate::models::{DateRange, Extremes, WeatherParameter};
use crate::services::AnalyticsService;
use crate::AppState;

/// Optional date range for analytics queries (YYYY-MM-DD)
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtremesResponse {
    pub city: String,
    pub parameter: WeatherParameter,
    #[serde(flatten)]
    pub extremes: Extremes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct AverageResponse {
    pub city: String,
    pub parameter: WeatherParameter,
    pub average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Validate path and query input shared by the analytics endpoints
fn parse_request(
    parameter: &str,
    query: &DateRangeQuery,
) -> AppResult<(WeatherParameter, Option<DateRange>)> {
    let parameter = parameter.parse::<WeatherParameter>().map_err(|_| {
        AppError::validation(
            "parameter",
            format!("Unknown weather parameter '{}'", parameter),
        )
    })?;

    let range = parse_date_range(query.start_date.as_deref(), query.end_date.as_deref())
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

    Ok((parameter, range))
}

fn no_data(city: &str, parameter: WeatherParameter) -> AppError {
    AppError::NotFound(format!(
        "Data for {} {} in specified date range",
        city, parameter
    ))
}

/// Get min and max values for a weather parameter in a city
pub async fn get_extremes(
    State(state): State<AppState>,
    Path((city, parameter)): Path<(String, String)>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<ExtremesResponse>> {
    let (parameter, range) = parse_request(&parameter, &query)?;
    if !is_storable_city_name(&city) {
        return Err(no_data(&city, parameter));
    }

    let service = AnalyticsService::new(state.db);
    let extremes = service.get_extremes(&city, parameter, range).await?;

    if extremes.is_empty() {
        return Err(no_data(&city, parameter));
    }

    Ok(Json(ExtremesResponse {
        city,
        parameter,
        extremes,
        start_date: range.map(|r| r.start),
        end_date: range.map(|r| r.end),
    }))
}

/// Get the average value for a weather parameter in a city
pub async fn get_average(
    State(state): State<AppState>,
    Path((city, parameter)): Path<(String, String)>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<AverageResponse>> {
    let (parameter, range) = parse_request(&parameter, &query)?;
    if !is_storable_city_name(&city) {
        return Err(no_data(&city, parameter));
    }

    let service = AnalyticsService::new(state.db);
    let average = service
        .get_average(&city, parameter, range)
        .await?
        .ok_or_else(|| no_data(&city, parameter))?;

    Ok(Json(AverageResponse {
        city,
        parameter,
        average,
        start_date: range.map(|r| r.start),
        end_date: range.map(|r| r.end),
    }))
}
