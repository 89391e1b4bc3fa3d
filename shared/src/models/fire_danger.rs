//! Fire danger rating models
//!
//! Scores a day's maximum temperature, wind speed, humidity and precipitation
//! into an ordinal danger category and names the conditions behind it.
//! Ratings are derived on demand and never stored.

use serde::{Deserialize, Serialize};

use super::weather::WeatherReading;
use chrono::NaiveDate;

/// Ordinal fire danger category, ordered from least to most dangerous
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DangerCategory {
    Low,
    Moderate,
    High,
    Extreme,
}

impl DangerCategory {
    /// Map a danger score onto a category (inclusive lower bounds, highest first)
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 7 => DangerCategory::Extreme,
            s if s >= 5 => DangerCategory::High,
            s if s >= 3 => DangerCategory::Moderate,
            _ => DangerCategory::Low,
        }
    }

    /// High and Extreme days make up the high-risk subset
    pub fn is_high_risk(&self) -> bool {
        matches!(self, DangerCategory::High | DangerCategory::Extreme)
    }
}

/// Category plus the conditions that contributed to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DangerRating {
    pub category: DangerCategory,
    pub risk_factors: Vec<String>,
}

// ============================================================================
// Threshold tables
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Comparison {
    /// value >= bound
    AtLeast,
    /// value <= bound
    AtMost,
    /// value > bound
    Above,
}

impl Comparison {
    fn matches(self, value: f64, bound: f64) -> bool {
        match self {
            Comparison::AtLeast => value >= bound,
            Comparison::AtMost => value <= bound,
            Comparison::Above => value > bound,
        }
    }
}

/// Mutually exclusive tiers, most severe first. Only the first match applies.
struct Tiers<T: 'static> {
    comparison: Comparison,
    tiers: &'static [(f64, T)],
}

impl<T: Copy> Tiers<T> {
    fn lookup(&self, value: f64) -> Option<T> {
        self.tiers
            .iter()
            .find(|(bound, _)| self.comparison.matches(value, *bound))
            .map(|(_, outcome)| *outcome)
    }
}

const TEMPERATURE_SCORE: Tiers<i32> = Tiers {
    comparison: Comparison::AtLeast,
    tiers: &[(35.0, 3), (28.0, 2), (20.0, 1)],
};

const WIND_SCORE: Tiers<i32> = Tiers {
    comparison: Comparison::AtLeast,
    tiers: &[(35.0, 3), (25.0, 2), (15.0, 1)],
};

const HUMIDITY_SCORE: Tiers<i32> = Tiers {
    comparison: Comparison::AtMost,
    tiers: &[(30.0, 3), (45.0, 2), (60.0, 1)],
};

// Rain dampens the score
const PRECIPITATION_SCORE: Tiers<i32> = Tiers {
    comparison: Comparison::Above,
    tiers: &[(5.0, -3), (2.0, -2), (0.0, -1)],
};

const TEMPERATURE_FACTOR: Tiers<&str> = Tiers {
    comparison: Comparison::AtLeast,
    tiers: &[(35.0, "Extreme temperature"), (28.0, "High temperature")],
};

const WIND_FACTOR: Tiers<&str> = Tiers {
    comparison: Comparison::AtLeast,
    tiers: &[(35.0, "Extreme winds"), (25.0, "Strong winds")],
};

const HUMIDITY_FACTOR: Tiers<&str> = Tiers {
    comparison: Comparison::AtMost,
    tiers: &[(30.0, "Very low humidity"), (45.0, "Low humidity")],
};

// Fires only at zero or below, unlike the "> 0" scoring band
const PRECIPITATION_FACTOR: Tiers<&str> = Tiers {
    comparison: Comparison::AtMost,
    tiers: &[(0.0, "No precipitation")],
};

// ============================================================================
// Scoring
// ============================================================================

/// Sum the per-condition tier scores. Range is -3..=9.
pub fn danger_score(temp_max: f64, wind_speed: f64, humidity: f64, precipitation: f64) -> i32 {
    [
        TEMPERATURE_SCORE.lookup(temp_max),
        WIND_SCORE.lookup(wind_speed),
        HUMIDITY_SCORE.lookup(humidity),
        PRECIPITATION_SCORE.lookup(precipitation),
    ]
    .into_iter()
    .flatten()
    .sum()
}

/// Name the conditions contributing to fire danger, in the order
/// temperature, wind, humidity, precipitation
pub fn derive_factors(
    temp_max: f64,
    wind_speed: f64,
    humidity: f64,
    precipitation: f64,
) -> Vec<String> {
    [
        TEMPERATURE_FACTOR.lookup(temp_max),
        WIND_FACTOR.lookup(wind_speed),
        HUMIDITY_FACTOR.lookup(humidity),
        PRECIPITATION_FACTOR.lookup(precipitation),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect()
}

/// Rate fire danger for one day's readings
pub fn compute_rating(
    temp_max: f64,
    wind_speed: f64,
    humidity: f64,
    precipitation: f64,
) -> DangerRating {
    let score = danger_score(temp_max, wind_speed, humidity, precipitation);

    DangerRating {
        category: DangerCategory::from_score(score),
        risk_factors: derive_factors(temp_max, wind_speed, humidity, precipitation),
    }
}

impl WeatherReading {
    pub fn danger_rating(&self) -> DangerRating {
        compute_rating(
            self.temp_max,
            self.wind_speed,
            self.humidity,
            self.precipitation,
        )
    }
}

// ============================================================================
// Reports
// ============================================================================

/// Fire danger for a single day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FireDangerReport {
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
    pub rating: DangerCategory,
    pub details: FireDangerDetails,
}

/// Raw readings behind a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FireDangerDetails {
    pub temperature: f64,
    pub wind_speed: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub risk_factors: Vec<String>,
}

impl From<&WeatherReading> for FireDangerReport {
    fn from(reading: &WeatherReading) -> Self {
        let DangerRating {
            category,
            risk_factors,
        } = reading.danger_rating();

        FireDangerReport {
            date: reading.date,
            rating: category,
            details: FireDangerDetails {
                temperature: reading.temp_max,
                wind_speed: reading.wind_speed,
                humidity: reading.humidity,
                precipitation: reading.precipitation,
                risk_factors,
            },
        }
    }
}

/// Keep High and Extreme days, preserving order
pub fn high_risk_days(reports: Vec<FireDangerReport>) -> Vec<FireDangerReport> {
    reports
        .into_iter()
        .filter(|report| report.rating.is_high_risk())
        .collect()
}
