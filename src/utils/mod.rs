//! Utility helpers for angle math and logging.

pub mod logging;
pub mod math;

pub use math::{normalize_angle, polar_to_cartesian};
