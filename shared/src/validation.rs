//! Validation utilities for analytics queries

use chrono::NaiveDate;

use crate::types::DateRange;

/// Date format accepted in query strings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| "Invalid date format. Use YYYY-MM-DD")
}

/// Validate an optional start/end pair.
///
/// Both bounds or neither must be given. Returns `None` for an unbounded query.
pub fn parse_date_range(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<Option<DateRange>, &'static str> {
    match (start_date, end_date) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => {
            let start = parse_date(start)?;
            let end = parse_date(end)?;
            if start > end {
                return Err("start_date must not be after end_date");
            }
            Ok(Some(DateRange { start, end }))
        }
        _ => Err("Both start_date and end_date must be provided together"),
    }
}

/// Whether a city name from the URL path could exist in `locations`.
///
/// Names that fail this can have no stored rows, so lookups treat them as
/// not found without querying.
pub fn is_storable_city_name(city: &str) -> bool {
    let trimmed = city.trim();
    // locations.city_name is VARCHAR(100)
    !trimmed.is_empty() && trimmed.chars().count() <= 100
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_range() {
        assert_eq!(parse_date_range(None, None), Ok(None));
    }

    #[test]
    fn test_valid_range() {
        let range = parse_date_range(Some("2024-01-01"), Some("2024-01-31"))
            .unwrap()
            .unwrap();
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 1, 31));
    }

    #[test]
    fn test_single_day_range() {
        let range = parse_date_range(Some("2024-03-05"), Some("2024-03-05"))
            .unwrap()
            .unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_half_range_rejected() {
        assert_eq!(
            parse_date_range(Some("2024-01-01"), None),
            Err("Both start_date and end_date must be provided together")
        );
        assert!(parse_date_range(None, Some("2024-01-01")).is_err());
    }

    #[test]
    fn test_bad_format_rejected() {
        assert!(parse_date_range(Some("01/02/2024"), Some("2024-02-01")).is_err());
        assert!(parse_date_range(Some("2024-02-30"), Some("2024-03-01")).is_err());
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert_eq!(
            parse_date_range(Some("2024-02-01"), Some("2024-01-01")),
            Err("start_date must not be after end_date")
        );
    }

    #[test]
    fn test_storable_city_name() {
        assert!(is_storable_city_name("Los Angeles, CA, United States"));
        assert!(is_storable_city_name(&"x".repeat(100)));
        assert!(!is_storable_city_name("   "));
        assert!(!is_storable_city_name(&"x".repeat(101)));
    }
}
