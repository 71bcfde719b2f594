use serde::{Deserialize, Serialize};

use crate::config::{
    INITIAL_ANGLE, REFERENCE_ANGULAR_VELOCITY, REFERENCE_CENTRAL_MASS, REFERENCE_DISTANCE,
};

/// A generalized coordinate and its first time derivative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub value: f64,
    pub speed: f64,
}

impl Coordinate {
    pub const fn new(value: f64, speed: f64) -> Self {
        Self { value, speed }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.speed.is_finite()
    }
}

/// Fixed starting point of every orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Radial coordinate in meters and m/s.
    pub distance: Coordinate,
    /// Polar angle in radians and rad/s.
    pub angle: Coordinate,
}

impl InitialConditions {
    /// One reference distance out, moving at the reference angular velocity.
    pub const REFERENCE: Self = Self {
        distance: Coordinate::new(REFERENCE_DISTANCE, 0.0),
        angle: Coordinate::new(INITIAL_ANGLE, REFERENCE_ANGULAR_VELOCITY),
    };
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Mutable state of the orbiting body, expressed in polar coordinates around
/// the central body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    pub distance: Coordinate,
    pub angle: Coordinate,
    pub central_mass_kg: f64,
    pub paused: bool,
    /// Simulated seconds elapsed per real second.
    pub simulation_speed: f64,
}

impl OrbitState {
    pub fn new(initial: InitialConditions, simulation_speed: f64) -> Self {
        Self {
            distance: initial.distance,
            angle: initial.angle,
            central_mass_kg: REFERENCE_CENTRAL_MASS,
            paused: false,
            simulation_speed,
        }
    }

    /// Restores position and velocity, leaving mass, speed and pause flag alone.
    pub fn reset_motion(&mut self, initial: InitialConditions) {
        self.distance = initial.distance;
        self.angle = initial.angle;
    }

    pub fn is_finite(&self) -> bool {
        self.distance.is_finite() && self.angle.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_motion_keeps_parameters() {
        let mut state = OrbitState::new(InitialConditions::REFERENCE, 1.0);
        state.distance.value *= 2.0;
        state.angle.speed = 0.0;
        state.central_mass_kg = 0.0;
        state.paused = true;

        state.reset_motion(InitialConditions::REFERENCE);

        assert_eq!(state.distance, InitialConditions::REFERENCE.distance);
        assert_eq!(state.angle, InitialConditions::REFERENCE.angle);
        assert_eq!(state.central_mass_kg, 0.0);
        assert!(state.paused);
    }

    #[test]
    fn nan_coordinate_is_not_finite() {
        let mut state = OrbitState::new(InitialConditions::REFERENCE, 1.0);
        assert!(state.is_finite());
        state.angle.speed = f64::NAN;
        assert!(!state.is_finite());
    }
}
