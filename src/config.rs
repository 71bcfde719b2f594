//! Global configuration constants and tunables for the orbit engine.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// Reference orbital radius (one astronomical unit, in meters).
pub const REFERENCE_DISTANCE: f64 = 1.496e11;

/// Reference central mass (one solar mass, in kilograms).
pub const REFERENCE_CENTRAL_MASS: f64 = 1.98855e30;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Length of the reference orbit in seconds (365.25 days).
pub const REFERENCE_ORBITAL_PERIOD: f64 = 365.25 * SECONDS_PER_DAY;

/// Angular velocity of the reference orbit (rad/s).
pub const REFERENCE_ANGULAR_VELOCITY: f64 = std::f64::consts::TAU / REFERENCE_ORBITAL_PERIOD;

/// Starting angle of the orbiting body.
pub const INITIAL_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Number of integrator sub-steps performed per tick.
pub const DEFAULT_SUBSTEPS: u32 = 1000;

/// Default simulation speed: 50 simulated days per real second.
pub const DEFAULT_SIMULATION_SPEED: f64 = 50.0 * SECONDS_PER_DAY;

/// Display units that one reference distance maps to.
pub const DEFAULT_DISPLAY_UNITS_PER_REFERENCE_DISTANCE: f64 = 10.0;

/// Fixed frame duration used when the caller does not supply one (in seconds).
pub const DEFAULT_FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Runtime configuration for an [`OrbitSimulation`](crate::OrbitSimulation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub substeps: u32,
    /// Simulated seconds per real second.
    pub simulation_speed: f64,
    pub display_units_per_reference_distance: f64,
    pub frame_seconds: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            substeps: DEFAULT_SUBSTEPS,
            simulation_speed: DEFAULT_SIMULATION_SPEED,
            display_units_per_reference_distance: DEFAULT_DISPLAY_UNITS_PER_REFERENCE_DISTANCE,
            frame_seconds: DEFAULT_FRAME_SECONDS,
        }
    }
}

impl SimulationConfig {
    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_simulation_speed(mut self, simulation_speed: f64) -> Self {
        self.simulation_speed = simulation_speed;
        self
    }

    /// Checks every field, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.substeps == 0 {
            return Err(SimulationError::InvalidConfig(
                "substeps must be at least 1".into(),
            ));
        }
        if !(self.simulation_speed.is_finite() && self.simulation_speed > 0.0) {
            return Err(SimulationError::InvalidSimulationSpeed(
                self.simulation_speed,
            ));
        }
        if !(self.display_units_per_reference_distance.is_finite()
            && self.display_units_per_reference_distance > 0.0)
        {
            return Err(SimulationError::InvalidConfig(format!(
                "display units per reference distance must be positive, got {}",
                self.display_units_per_reference_distance
            )));
        }
        if !(self.frame_seconds.is_finite() && self.frame_seconds > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "frame duration must be positive, got {}",
                self.frame_seconds
            )));
        }
        Ok(())
    }
}
