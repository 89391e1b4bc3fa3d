//! Domain models for the weather fire-risk service

mod analytics;
mod fire_danger;
mod weather;

pub use analytics::*;
pub use fire_danger::*;
pub use weather::*;
