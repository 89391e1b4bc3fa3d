//! Domain models for the weather fire-risk server
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
pub use shared::types::*;
