//! Analytics service for extremes and averages of daily weather parameters

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;
use crate::models::{DateRange, Extremes, WeatherParameter};

/// Analytics service
#[derive(Clone)]
pub struct AnalyticsService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct ExtremesRow {
    min_value: Option<Decimal>,
    max_value: Option<Decimal>,
}

#[derive(Debug, FromRow)]
struct AverageRow {
    avg_value: Option<Decimal>,
}

/// Build an aggregate query over a city's daily rows.
///
/// `select` may only contain column names taken from [`WeatherParameter`].
/// Binds: `$1` city, then `$2`/`$3` start/end when a range is given.
fn aggregate_query(select: &str, range: Option<&DateRange>) -> String {
    let mut query = format!(
        "SELECT {} FROM daily_weather dw \
         JOIN locations l ON dw.location_id = l.location_id \
         WHERE l.city_name = $1",
        select
    );
    if range.is_some() {
        query.push_str(" AND dw.date BETWEEN $2 AND $3");
    }
    query
}

fn to_f64(value: Option<Decimal>) -> Option<f64> {
    value.and_then(|v| v.to_f64())
}

impl AnalyticsService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Minimum and maximum of a parameter for a city, optionally within a date range
    pub async fn get_extremes(
        &self,
        city: &str,
        parameter: WeatherParameter,
        range: Option<DateRange>,
    ) -> AppResult<Extremes> {
        let column = parameter.column();
        let select = format!(
            "MIN(dw.{column}) AS min_value, MAX(dw.{column}) AS max_value",
            column = column
        );
        let query = aggregate_query(&select, range.as_ref());

        let mut statement = sqlx::query_as::<_, ExtremesRow>(&query).bind(city);
        if let Some(range) = range {
            statement = statement.bind(range.start).bind(range.end);
        }

        let row = statement.fetch_one(&self.db).await.map_err(|e| {
            tracing::error!("Error getting extremes for {}: {}", parameter, e);
            e
        })?;

        Ok(Extremes {
            min_value: to_f64(row.min_value),
            max_value: to_f64(row.max_value),
        })
    }

    /// Average of a parameter for a city; `None` when no rows match
    pub async fn get_average(
        &self,
        city: &str,
        parameter: WeatherParameter,
        range: Option<DateRange>,
    ) -> AppResult<Option<f64>> {
        let select = format!("AVG(dw.{}) AS avg_value", parameter.column());
        let query = aggregate_query(&select, range.as_ref());

        let mut statement = sqlx::query_as::<_, AverageRow>(&query).bind(city);
        if let Some(range) = range {
            statement = statement.bind(range.start).bind(range.end);
        }

        let row = statement.fetch_one(&self.db).await.map_err(|e| {
            tracing::error!("Error getting average for {}: {}", parameter, e);
            e
        })?;

        Ok(to_f64(row.avg_value))
    }
}
