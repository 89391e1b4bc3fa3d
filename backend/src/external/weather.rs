//! Weather API client for fetching observation timelines
//!
//! Integrates with the Visual Crossing timeline API (metric units)

use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::WeatherApiConfig;
use crate::error::{AppError, AppResult};

/// Timeline API client
#[derive(Clone)]
pub struct TimelineClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Timeline response for one resolved location
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub resolved_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    #[serde(default)]
    pub days: Vec<TimelineDay>,
}

/// Daily summary within a timeline
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineDay {
    pub datetime: NaiveDate,
    pub tempmax: f64,
    pub tempmin: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub windgust: Option<f64>,
    pub winddir: Option<f64>,
    pub precip: Option<f64>,
    pub uvindex: Option<f64>,
    pub cloudcover: Option<f64>,
    pub dew: Option<f64>,
    pub conditions: Option<String>,
    #[serde(default)]
    pub hours: Vec<TimelineHour>,
}

/// Hourly observation within a day
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineHour {
    pub datetime: NaiveTime,
    pub temp: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub windgust: Option<f64>,
    pub winddir: Option<f64>,
    pub cloudcover: Option<f64>,
    pub conditions: Option<String>,
}

impl TimelineClient {
    /// Create a new TimelineClient from configuration
    pub fn new(config: &WeatherApiConfig) -> AppResult<Self> {
        if config.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Build the request URL; location and period are percent-encoded as path segments
    fn timeline_url(&self, location: &str, period: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Configuration(format!("Invalid weather API URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Weather API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(location)
            .push(period);

        url.query_pairs_mut()
            .append_pair("unitGroup", "metric")
            .append_pair("key", &self.api_key)
            .append_pair("contentType", "json");

        Ok(url)
    }

    /// Fetch the observation timeline for a location and period
    pub async fn fetch_timeline(&self, location: &str, period: &str) -> AppResult<Timeline> {
        let url = self.timeline_url(location, period)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherApi(format!("{} - {}", status, body)));
        }

        response
            .json::<Timeline>()
            .await
            .map_err(|e| AppError::WeatherApi(format!("failed to parse timeline: {}", e)))
    }
}
