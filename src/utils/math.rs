//! Scalar helpers for polar coordinates.

use glam::DVec2;
use std::f64::consts::TAU;

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Converts polar coordinates into a cartesian point in the orbital plane.
pub fn polar_to_cartesian(radius: f64, angle: f64) -> DVec2 {
    DVec2::from_angle(angle) * radius
}
