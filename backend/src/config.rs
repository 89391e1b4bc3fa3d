//! Configuration management for the weather fire-risk server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FIRE_RISK_ prefix

use std::net::{AddrParseError, SocketAddr};

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Upstream weather provider configuration
    pub weather_api: WeatherApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection before failing the request
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherApiConfig {
    /// Timeline API endpoint
    pub base_url: String,

    /// Timeline API key
    pub api_key: String,

    /// Location imported by `PUT /init`
    pub location: String,

    /// Timeline period, e.g. "tomorrow", "last7days" or "2024-01-01/2024-01-31"
    pub period: String,

    /// HTTP timeout for upstream requests
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FIRE_RISK_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FIRE_RISK_ prefix)
            .add_source(
                Environment::with_prefix("FIRE_RISK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Builder holding the in-code defaults
    fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default(
                "weather_api.base_url",
                "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline",
            )?
            .set_default("weather_api.api_key", "")?
            .set_default("weather_api.location", "Los Angeles")?
            .set_default("weather_api.period", "tomorrow")?
            .set_default("weather_api.request_timeout_secs", 30)
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
