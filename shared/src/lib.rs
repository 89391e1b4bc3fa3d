//! Shared types and models for the weather fire-risk service
//!
//! Pure domain code with no I/O: weather readings, the fire danger rating
//! engine, analytics parameters and request validation.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
