//! Business logic services for the weather fire-risk server

pub mod analytics;
pub mod fire_danger;
pub mod ingestion;
pub mod location;

pub use analytics::AnalyticsService;
pub use fire_danger::FireDangerService;
pub use ingestion::{IngestionService, IngestionSummary};
pub use location::LocationService;
