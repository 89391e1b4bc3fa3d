//! Weather analytics models

use serde::{Deserialize, Serialize};

/// Numeric daily weather columns that analytics queries may aggregate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeatherParameter {
    TempMax,
    TempMin,
    Humidity,
    WindSpeed,
    WindGust,
    WindDir,
    Precipitation,
    UvIndex,
    CloudCover,
    Dew,
}

impl WeatherParameter {
    pub const ALL: [WeatherParameter; 10] = [
        WeatherParameter::TempMax,
        WeatherParameter::TempMin,
        WeatherParameter::Humidity,
        WeatherParameter::WindSpeed,
        WeatherParameter::WindGust,
        WeatherParameter::WindDir,
        WeatherParameter::Precipitation,
        WeatherParameter::UvIndex,
        WeatherParameter::CloudCover,
        WeatherParameter::Dew,
    ];

    /// Column name in `daily_weather`. Safe to interpolate into SQL.
    pub fn column(&self) -> &'static str {
        match self {
            WeatherParameter::TempMax => "temp_max",
            WeatherParameter::TempMin => "temp_min",
            WeatherParameter::Humidity => "humidity",
            WeatherParameter::WindSpeed => "wind_speed",
            WeatherParameter::WindGust => "wind_gust",
            WeatherParameter::WindDir => "wind_dir",
            WeatherParameter::Precipitation => "precipitation",
            WeatherParameter::UvIndex => "uv_index",
            WeatherParameter::CloudCover => "cloud_cover",
            WeatherParameter::Dew => "dew",
        }
    }
}

impl std::fmt::Display for WeatherParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl std::str::FromStr for WeatherParameter {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherParameter::ALL
            .into_iter()
            .find(|p| p.column() == s)
            .ok_or("Unknown weather parameter")
    }
}

/// Minimum and maximum of a parameter; both `None` when no rows matched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Extremes {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl Extremes {
    pub fn is_empty(&self) -> bool {
        self.min_value.is_none() && self.max_value.is_none()
    }
}
