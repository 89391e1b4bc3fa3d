//! Ingestion service for importing timeline observations into the store
//!
//! Days already stored for a location are skipped along with their hours.
//! Each new day is written in its own transaction.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{Connection, PgConnection, PgPool, Postgres, QueryBuilder};

use crate::error::{AppError, AppResult};
use crate::external::weather::{Timeline, TimelineDay};
use crate::external::TimelineClient;
use crate::services::location::{LocationService, NewLocation};

/// Ingestion service
#[derive(Clone)]
pub struct IngestionService {
    db: PgPool,
    locations: LocationService,
    client: Option<TimelineClient>,
}

/// Outcome of one import
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IngestionSummary {
    pub location_id: i32,
    pub city_name: String,
    pub days_inserted: usize,
    pub days_skipped: usize,
    pub hours_inserted: usize,
    /// Days whose daily row was stored but whose hourly rows failed
    pub hourly_failures: usize,
}

/// Round to the two decimal places of the DECIMAL(5,2) columns
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(2)
}

/// Round to the six decimal places of the DECIMAL(9,6) coordinate columns
fn to_coordinate(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp(6)
}

impl IngestionService {
    /// Create a new IngestionService instance
    pub fn new(db: PgPool) -> Self {
        Self {
            locations: LocationService::new(db.clone()),
            db,
            client: None,
        }
    }

    /// Create a new IngestionService with a timeline API client
    pub fn with_client(db: PgPool, client: TimelineClient) -> Self {
        Self {
            client: Some(client),
            ..Self::new(db)
        }
    }

    /// Fetch a timeline from the provider and import it
    pub async fn run(&self, location: &str, period: &str) -> AppResult<IngestionSummary> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| AppError::Configuration("Weather API client not configured".to_string()))?;

        tracing::info!(location, period, "Fetching weather timeline");
        let timeline = client.fetch_timeline(location, period).await?;

        self.import(&timeline).await
    }

    /// Store a timeline's location, days and hours
    pub async fn import(&self, timeline: &Timeline) -> AppResult<IngestionSummary> {
        let location_id = self
            .locations
            .find_or_create(&NewLocation {
                city_name: timeline.resolved_address.clone(),
                latitude: to_coordinate(timeline.latitude),
                longitude: to_coordinate(timeline.longitude),
                timezone: timeline.timezone.clone(),
            })
            .await?;

        tracing::info!(location_id, "Processing data for location");

        let mut summary = IngestionSummary {
            location_id,
            city_name: timeline.resolved_address.clone(),
            ..Default::default()
        };

        for day in &timeline.days {
            let mut tx = self.db.begin().await?;

            let Some(daily_id) = Self::insert_daily(&mut tx, location_id, day).await? else {
                tracing::info!("Skipping {} - already exists", day.datetime);
                summary.days_skipped += 1;
                continue;
            };

            tracing::info!("Processing new daily weather for {}", day.datetime);
            summary.days_inserted += 1;

            // Savepoint so a failed hourly batch keeps the daily row
            let mut hours_tx = tx.begin().await?;
            match Self::insert_hours(&mut hours_tx, daily_id, day).await {
                Ok(inserted) => {
                    hours_tx.commit().await?;
                    summary.hours_inserted += inserted;
                }
                Err(e) => {
                    hours_tx.rollback().await?;
                    tracing::error!("Failed to insert hourly weather for {}: {}", day.datetime, e);
                    summary.hourly_failures += 1;
                }
            }

            tx.commit().await?;
        }

        tracing::info!(?summary, "Weather import finished");

        Ok(summary)
    }

    /// Insert the daily row unless (location, date) already exists
    async fn insert_daily(
        conn: &mut PgConnection,
        location_id: i32,
        day: &TimelineDay,
    ) -> AppResult<Option<i32>> {
        let daily_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO daily_weather (
                location_id, date, temp_max, temp_min, humidity,
                wind_speed, wind_gust, wind_dir, precipitation,
                uv_index, cloud_cover, dew, conditions
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (location_id, date) DO NOTHING
            RETURNING daily_id
            "#,
        )
        .bind(location_id)
        .bind(day.datetime)
        .bind(to_decimal(day.tempmax))
        .bind(to_decimal(day.tempmin))
        .bind(to_decimal(day.humidity))
        .bind(to_decimal(day.windspeed))
        .bind(to_decimal(day.windgust.unwrap_or(0.0)))
        .bind(day.winddir.map(to_decimal))
        .bind(to_decimal(day.precip.unwrap_or(0.0)))
        .bind(day.uvindex.map(to_decimal))
        .bind(day.cloudcover.map(to_decimal))
        .bind(day.dew.map(to_decimal))
        .bind(&day.conditions)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(daily_id)
    }

    /// Bulk insert a day's hours, returning how many rows were written
    async fn insert_hours(
        conn: &mut PgConnection,
        daily_id: i32,
        day: &TimelineDay,
    ) -> Result<usize, sqlx::Error> {
        if day.hours.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO hourly_weather (\
             daily_id, datetime, temp, humidity, wind_speed, \
             wind_gust, wind_dir, cloud_cover, conditions) ",
        );

        builder.push_values(&day.hours, |mut row, hour| {
            row.push_bind(daily_id)
                .push_bind(day.datetime.and_time(hour.datetime))
                .push_bind(to_decimal(hour.temp))
                .push_bind(to_decimal(hour.humidity))
                .push_bind(to_decimal(hour.windspeed))
                .push_bind(to_decimal(hour.windgust.unwrap_or(0.0)))
                .push_bind(hour.winddir.map(to_decimal))
                .push_bind(hour.cloudcover.map(to_decimal))
                .push_bind(hour.conditions.clone());
        });
        builder.push(" ON CONFLICT (daily_id, datetime) DO NOTHING");

        let result = builder.build().execute(&mut *conn).await?;

        Ok(result.rows_affected() as usize)
    }
}
