//! Fire danger service for rating stored daily weather
//!
//! Ratings are recomputed on every call; nothing is cached or written back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;
use crate::models::{high_risk_days, DailyObservation, FireDangerReport, WeatherReading};

/// Fire danger service
#[derive(Clone)]
pub struct FireDangerService {
    db: PgPool,
}

/// Daily row with the four readings the rating needs
#[derive(Debug, Clone, FromRow)]
struct DailyReadingRow {
    date: NaiveDate,
    temp_max: Option<Decimal>,
    wind_speed: Option<Decimal>,
    humidity: Option<Decimal>,
    precipitation: Option<Decimal>,
}

impl From<DailyReadingRow> for DailyObservation {
    fn from(row: DailyReadingRow) -> Self {
        DailyObservation {
            date: row.date,
            temp_max: row.temp_max,
            wind_speed: row.wind_speed,
            humidity: row.humidity,
            precipitation: row.precipitation,
        }
    }
}

impl FireDangerService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Rate every stored day for a city, most recent first.
    ///
    /// A city without data yields an empty list. Rows that cannot be scored
    /// are logged and left out.
    pub async fn get_fire_danger_by_date(&self, city: &str) -> AppResult<Vec<FireDangerReport>> {
        let observations = self.fetch_daily_observations(city).await?;

        if observations.is_empty() {
            tracing::warn!(city, "No weather data found for city");
            return Ok(Vec::new());
        }

        Ok(Self::assess(&observations))
    }

    /// High and Extreme days for a city, most recent first
    pub async fn get_high_risk_days(&self, city: &str) -> AppResult<Vec<FireDangerReport>> {
        let reports = self.get_fire_danger_by_date(city).await?;
        Ok(high_risk_days(reports))
    }

    async fn fetch_daily_observations(&self, city: &str) -> AppResult<Vec<DailyObservation>> {
        // Released back to the pool when dropped, on every return path
        let mut conn = self.db.acquire().await?;

        let rows = sqlx::query_as::<_, DailyReadingRow>(
            r#"
            SELECT
                dw.date,
                dw.temp_max,
                dw.wind_speed,
                dw.humidity,
                dw.precipitation
            FROM daily_weather dw
            JOIN locations l ON dw.location_id = l.location_id
            WHERE l.city_name = $1
            ORDER BY dw.date DESC
            "#,
        )
        .bind(city)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(DailyObservation::from).collect())
    }

    /// Score each observation in order, skipping rows with missing or
    /// non-numeric readings
    pub fn assess(observations: &[DailyObservation]) -> Vec<FireDangerReport> {
        observations
            .iter()
            .filter_map(|observation| match WeatherReading::try_from(observation) {
                Ok(reading) => Some(FireDangerReport::from(&reading)),
                Err(e) => {
                    tracing::warn!(
                        date = %observation.date,
                        error = %e,
                        "Skipping weather row that cannot be rated"
                    );
                    None
                }
            })
            .collect()
    }
}
