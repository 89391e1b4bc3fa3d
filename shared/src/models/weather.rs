//! Weather observation models

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored daily row as read from the observation store.
///
/// Values are nullable here even where the schema forbids it; conversion to a
/// [`WeatherReading`] decides whether the row can be scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub temp_max: Option<Decimal>,
    pub wind_speed: Option<Decimal>,
    pub humidity: Option<Decimal>,
    pub precipitation: Option<Decimal>,
}

/// One city-day of readings used for fire danger scoring
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub date: NaiveDate,
    /// Maximum temperature in degrees Celsius
    pub temp_max: f64,
    pub wind_speed: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Precipitation depth in millimetres
    pub precipitation: f64,
}

/// Why a stored row could not be turned into a reading
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RowConversionError {
    #[error("missing value for {0}")]
    MissingField(&'static str),

    #[error("value for {0} is not a finite number")]
    NonNumeric(&'static str),
}

fn reading_value(field: &'static str, value: Option<Decimal>) -> Result<f64, RowConversionError> {
    let value = value.ok_or(RowConversionError::MissingField(field))?;
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or(RowConversionError::NonNumeric(field))
}

impl TryFrom<&DailyObservation> for WeatherReading {
    type Error = RowConversionError;

    fn try_from(row: &DailyObservation) -> Result<Self, Self::Error> {
        Ok(WeatherReading {
            date: row.date,
            temp_max: reading_value("temp_max", row.temp_max)?,
            wind_speed: reading_value("wind_speed", row.wind_speed)?,
            humidity: reading_value("humidity", row.humidity)?,
            precipitation: reading_value("precipitation", row.precipitation)?,
        })
    }
}
