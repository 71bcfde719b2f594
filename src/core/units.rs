//! Physical constants and conversions between meters and display units.

use serde::{Deserialize, Serialize};

use crate::{
    config::{
        SimulationConfig, GRAVITATIONAL_CONSTANT, REFERENCE_ANGULAR_VELOCITY,
        REFERENCE_CENTRAL_MASS, REFERENCE_DISTANCE,
    },
    core::state::OrbitState,
};

/// Read-only constants derived once when a simulation is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    pub gravitational_constant: f64,
    pub reference_distance: f64,
    pub reference_angular_velocity: f64,
    pub reference_central_mass: f64,
    /// Meters per display unit.
    pub scale_factor: f64,
    pub substeps: u32,
    pub default_simulation_speed: f64,
    pub frame_seconds: f64,
}

impl Default for Constants {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl Constants {
    /// Derives the constant set. The config is assumed to be validated.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            reference_distance: REFERENCE_DISTANCE,
            reference_angular_velocity: REFERENCE_ANGULAR_VELOCITY,
            reference_central_mass: REFERENCE_CENTRAL_MASS,
            scale_factor: REFERENCE_DISTANCE / config.display_units_per_reference_distance,
            substeps: config.substeps,
            default_simulation_speed: config.simulation_speed,
            frame_seconds: config.frame_seconds,
        }
    }

    pub fn to_display_units(&self, meters: f64) -> f64 {
        meters / self.scale_factor
    }

    pub fn to_meters(&self, display_units: f64) -> f64 {
        display_units * self.scale_factor
    }

    /// Orbital distance in display units; the only distance a renderer should use.
    pub fn scaled_distance(&self, state: &OrbitState) -> f64 {
        self.to_display_units(state.distance.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::InitialConditions;

    #[test]
    fn reference_distance_maps_to_configured_units() {
        let config = SimulationConfig {
            display_units_per_reference_distance: 25.0,
            ..SimulationConfig::default()
        };
        let constants = Constants::from_config(&config);
        let state = OrbitState::new(InitialConditions::REFERENCE, 1.0);
        assert!((constants.scaled_distance(&state) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn display_conversion_is_inverse() {
        let constants = Constants::default();
        let meters = 2.5e11;
        let back = constants.to_meters(constants.to_display_units(meters));
        assert!((back - meters).abs() / meters < 1e-15);
    }
}
