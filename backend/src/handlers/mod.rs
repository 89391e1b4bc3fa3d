//! HTTP handlers

pub mod analytics;
pub mod fire_danger;
pub mod health;
pub mod init;
pub mod location;

pub use analytics::*;
pub use fire_danger::*;
pub use health::*;
pub use init::*;
pub use location::*;
