//! Disaster data sources.

pub mod drought;
pub mod earthquake;
pub mod flood;

/// Shown in place of a missing attribute.
pub const NOT_AVAILABLE: &str = "N/A";
