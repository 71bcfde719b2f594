//! Core types describing the orbiting body and the constants it is measured in.

pub mod state;
pub mod units;

pub use state::{Coordinate, InitialConditions, OrbitState};
pub use units::Constants;
