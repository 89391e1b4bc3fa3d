//! Fire danger integration tests
//!
//! Tests for the fire danger rating engine including:
//! - Category monotonicity in each weather condition
//! - High-risk filtering (subset, order preservation)
//! - Report wire format

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::models::{
    compute_rating, danger_score, high_risk_days, DailyObservation, DangerCategory,
    FireDangerReport, WeatherReading,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 1).unwrap() + chrono::Days::new(n as u64)
}

fn reading(date: NaiveDate, t: f64, w: f64, h: f64, p: f64) -> WeatherReading {
    WeatherReading {
        date,
        temp_max: t,
        wind_speed: w,
        humidity: h,
        precipitation: p,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_reference_days() {
        let cases = [
            ((36.0, 10.0, 70.0, 0.0), DangerCategory::Moderate),
            ((36.0, 36.0, 20.0, 0.0), DangerCategory::Extreme),
            ((15.0, 5.0, 80.0, 10.0), DangerCategory::Low),
            ((29.0, 26.0, 40.0, 1.0), DangerCategory::High),
        ];

        for ((t, w, h, p), expected) in cases {
            assert_eq!(compute_rating(t, w, h, p).category, expected);
        }
    }

    #[test]
    fn test_reference_day_factors() {
        assert_eq!(
            compute_rating(36.0, 36.0, 20.0, 0.0).risk_factors,
            vec![
                "Extreme temperature",
                "Extreme winds",
                "Very low humidity",
                "No precipitation"
            ]
        );
        assert_eq!(
            compute_rating(29.0, 26.0, 40.0, 1.0).risk_factors,
            vec!["High temperature", "Strong winds", "Low humidity"]
        );
        assert!(compute_rating(15.0, 5.0, 80.0, 10.0).risk_factors.is_empty());
    }

    #[test]
    fn test_stored_row_to_report() {
        let row = DailyObservation {
            date: day(0),
            temp_max: Some(dec("36.10")),
            wind_speed: Some(dec("36.00")),
            humidity: Some(dec("20.50")),
            precipitation: Some(dec("0.00")),
        };

        let reading = WeatherReading::try_from(&row).unwrap();
        let report = FireDangerReport::from(&reading);

        assert_eq!(report.date, day(0));
        assert_eq!(report.rating, DangerCategory::Extreme);
        assert!((report.details.temperature - 36.1).abs() < 1e-9);
        assert!((report.details.humidity - 20.5).abs() < 1e-9);
    }

    #[test]
    fn test_row_missing_reading_is_rejected() {
        let row = DailyObservation {
            date: day(0),
            temp_max: Some(dec("30.00")),
            wind_speed: None,
            humidity: Some(dec("40.00")),
            precipitation: Some(dec("0.00")),
        };

        assert!(WeatherReading::try_from(&row).is_err());
    }

    #[test]
    fn test_report_json_shape() {
        let report = FireDangerReport::from(&reading(day(0), 29.0, 26.0, 40.0, 1.0));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["date"], "2024-07-01");
        assert_eq!(json["rating"], "High");
        assert_eq!(json["details"]["temperature"], 29.0);
        assert_eq!(json["details"]["wind_speed"], 26.0);
        assert_eq!(json["details"]["humidity"], 40.0);
        assert_eq!(json["details"]["precipitation"], 1.0);
        assert_eq!(json["details"]["risk_factors"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_high_risk_days_keeps_newest_first_order() {
        let reports: Vec<FireDangerReport> = [
            reading(day(3), 36.0, 36.0, 20.0, 0.0),
            reading(day(2), 15.0, 5.0, 80.0, 10.0),
            reading(day(1), 29.0, 26.0, 40.0, 1.0),
            reading(day(0), 36.0, 10.0, 70.0, 0.0),
        ]
        .iter()
        .map(FireDangerReport::from)
        .collect();

        let high: Vec<NaiveDate> = high_risk_days(reports).iter().map(|r| r.date).collect();
        assert_eq!(high, vec![day(3), day(1)]);
    }

    #[test]
    fn test_high_risk_days_empty() {
        assert!(high_risk_days(Vec::new()).is_empty());

        let calm = vec![FireDangerReport::from(&reading(day(0), 10.0, 0.0, 90.0, 12.0))];
        assert!(high_risk_days(calm).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn temperature_strategy() -> impl Strategy<Value = f64> {
        -20.0f64..50.0
    }

    fn wind_strategy() -> impl Strategy<Value = f64> {
        0.0f64..80.0
    }

    fn humidity_strategy() -> impl Strategy<Value = f64> {
        0.0f64..=100.0
    }

    fn precipitation_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![Just(0.0f64), 0.0f64..30.0]
    }

    fn conditions_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (
            temperature_strategy(),
            wind_strategy(),
            humidity_strategy(),
            precipitation_strategy(),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every finite reading gets a category and the score stays in range
        #[test]
        fn prop_score_in_range((t, w, h, p) in conditions_strategy()) {
            let score = danger_score(t, w, h, p);
            prop_assert!((-3..=9).contains(&score));
            prop_assert_eq!(compute_rating(t, w, h, p).category, DangerCategory::from_score(score));
        }

        /// Rating the same reading twice gives the same result
        #[test]
        fn prop_rating_is_deterministic((t, w, h, p) in conditions_strategy()) {
            prop_assert_eq!(compute_rating(t, w, h, p), compute_rating(t, w, h, p));
        }

        /// Hotter never rates lower
        #[test]
        fn prop_temperature_monotonic(
            (t, w, h, p) in conditions_strategy(),
            delta in 0.0f64..30.0,
        ) {
            let base = compute_rating(t, w, h, p).category;
            let hotter = compute_rating(t + delta, w, h, p).category;
            prop_assert!(hotter >= base);
        }

        /// Windier never rates lower
        #[test]
        fn prop_wind_monotonic(
            (t, w, h, p) in conditions_strategy(),
            delta in 0.0f64..30.0,
        ) {
            let base = compute_rating(t, w, h, p).category;
            let windier = compute_rating(t, w + delta, h, p).category;
            prop_assert!(windier >= base);
        }

        /// Drier never rates lower
        #[test]
        fn prop_humidity_monotonic(
            (t, w, h, p) in conditions_strategy(),
            delta in 0.0f64..50.0,
        ) {
            let base = compute_rating(t, w, h, p).category;
            let drier = compute_rating(t, w, (h - delta).max(0.0), p).category;
            prop_assert!(drier >= base);
        }

        /// More rain never rates higher
        #[test]
        fn prop_precipitation_monotonic(
            (t, w, h, p) in conditions_strategy(),
            delta in 0.0f64..20.0,
        ) {
            let base = compute_rating(t, w, h, p).category;
            let wetter = compute_rating(t, w, h, p + delta).category;
            prop_assert!(wetter <= base);
        }

        /// "No precipitation" is named exactly when no rain fell
        #[test]
        fn prop_no_precipitation_factor((t, w, h, p) in conditions_strategy()) {
            let factors = compute_rating(t, w, h, p).risk_factors;
            let named = factors.iter().any(|f| f == "No precipitation");
            prop_assert_eq!(named, p <= 0.0);
        }

        /// High-risk days are an order-preserving subset of all days
        #[test]
        fn prop_high_risk_subset(
            conditions in prop::collection::vec(conditions_strategy(), 0..30),
        ) {
            let reports: Vec<FireDangerReport> = conditions
                .iter()
                .enumerate()
                .rev()
                .map(|(i, &(t, w, h, p))| FireDangerReport::from(&reading(day(i as u32), t, w, h, p)))
                .collect();

            let expected: Vec<NaiveDate> = reports
                .iter()
                .filter(|r| matches!(r.rating, DangerCategory::High | DangerCategory::Extreme))
                .map(|r| r.date)
                .collect();

            let high = high_risk_days(reports.clone());

            prop_assert!(high.iter().all(|r| r.rating >= DangerCategory::High));
            prop_assert_eq!(high.iter().map(|r| r.date).collect::<Vec<_>>(), expected);
            prop_assert!(high.windows(2).all(|pair| pair[0].date > pair[1].date));
        }
    }
}
