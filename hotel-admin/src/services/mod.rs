//! Services Module
//!
//! Cross-store logic that no single store owns:
//! - [`usage`] - reference usage queries
//! - [`seed`] - default reference data

pub mod seed;
pub mod usage;

pub use seed::{SeedReport, seed_defaults};
