//! Location service for the cities known to the observation store

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::AppResult;

const INSERT_LOCATION: &str = r#"
    INSERT INTO locations (city_name, latitude, longitude, timezone)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (city_name) DO NOTHING
    RETURNING location_id
"#;

/// Location service
#[derive(Clone)]
pub struct LocationService {
    db: PgPool,
}

/// Input for registering a location
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub city_name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub timezone: String,
}

impl LocationService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// All city names, alphabetically
    pub async fn list_cities(&self) -> AppResult<Vec<String>> {
        let cities = sqlx::query_scalar::<_, String>(
            "SELECT city_name FROM locations ORDER BY city_name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(cities)
    }

    /// Return the id of an existing city, registering it if absent.
    /// Coordinates and timezone of an existing city are left untouched.
    pub async fn find_or_create(&self, location: &NewLocation) -> AppResult<i32> {
        let inserted = sqlx::query_scalar::<_, i32>(INSERT_LOCATION)
            .bind(&location.city_name)
            .bind(location.latitude)
            .bind(location.longitude)
            .bind(&location.timezone)
            .fetch_optional(&self.db)
            .await?;

        if let Some(location_id) = inserted {
            tracing::info!(location_id, city = %location.city_name, "Registered new location");
            return Ok(location_id);
        }

        // Lost the insert to an existing or concurrent registration
        let location_id = sqlx::query_scalar::<_, i32>(
            "SELECT location_id FROM locations WHERE city_name = $1",
        )
        .bind(&location.city_name)
        .fetch_one(&self.db)
        .await?;

        Ok(location_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_tolerates_existing_city() {
        assert!(INSERT_LOCATION.contains("ON CONFLICT (city_name) DO NOTHING"));
        assert!(INSERT_LOCATION.trim_end().ends_with("RETURNING location_id"));
    }
}
