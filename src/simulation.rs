mod lifecycle;

pub use lifecycle::RunState;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{
    config::SimulationConfig,
    core::{
        state::{InitialConditions, OrbitState},
        units::Constants,
    },
    dynamics::{integrator::SubstepIntegrator, invariants},
    error::{Result, SimulationError},
    utils::{logging::ScopedTimer, math::polar_to_cartesian},
};

/// Renderer-facing view of the orbit after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitSnapshot {
    /// Distance in display units.
    pub scaled_distance: f64,
    /// Polar angle in radians, within `[0, 2π)`.
    pub angle: f64,
    /// Cartesian position in display units.
    pub position: DVec2,
    pub paused: bool,
    pub elapsed_seconds: f64,
}

/// Owns the orbit state and drives it forward one external frame at a time.
#[derive(Debug, Clone)]
pub struct OrbitSimulation {
    constants: Constants,
    integrator: SubstepIntegrator,
    initial: InitialConditions,
    state: OrbitState,
    mass_multiplier: f64,
    elapsed_seconds: f64,
}

impl Default for OrbitSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitSimulation {
    /// Creates a simulation from the default configuration.
    pub fn new() -> Self {
        Self::build(&SimulationConfig::default())
    }

    /// Creates a simulation after validating `config`.
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(&config))
    }

    fn build(config: &SimulationConfig) -> Self {
        let constants = Constants::from_config(config);
        let initial = InitialConditions::REFERENCE;
        let state = OrbitState::new(initial, constants.default_simulation_speed);
        log::debug!(
            "orbit simulation created: {} substeps, {} s/s, {} m per display unit",
            constants.substeps,
            constants.default_simulation_speed,
            constants.scale_factor
        );
        Self {
            integrator: SubstepIntegrator::from_constants(&constants),
            constants,
            initial,
            state,
            mass_multiplier: 1.0,
            elapsed_seconds: 0.0,
        }
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn initial_conditions(&self) -> InitialConditions {
        self.initial
    }

    /// Simulated seconds covered by successful ticks since the last restart.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Advances the orbit by one external frame of `dt` real seconds.
    ///
    /// A paused simulation ignores the call. If the integrator hits a
    /// numerical failure the state is left as it was before the call and the
    /// simulation pauses itself.
    pub fn tick(&mut self, dt: f64) -> Result<()> {
        if self.state.paused {
            return Ok(());
        }

        let _timer = ScopedTimer::new("orbit::tick");
        match self.integrator.step(&mut self.state, dt) {
            Ok(()) => {
                self.elapsed_seconds += self.state.simulation_speed * dt;
                Ok(())
            }
            Err(err @ SimulationError::InvalidTimeDelta(_)) => Err(err),
            Err(err) => {
                log::error!("orbit integration failed, pausing: {err}");
                self.state.paused = true;
                Err(err)
            }
        }
    }

    /// Ticks using the configured fixed frame duration.
    pub fn tick_frame(&mut self) -> Result<()> {
        self.tick(self.constants.frame_seconds)
    }

    pub fn scaled_distance(&self) -> f64 {
        self.constants.scaled_distance(&self.state)
    }

    /// Polar angle in radians.
    pub fn current_angle(&self) -> f64 {
        self.state.angle.value
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Position of the orbiting body in display units, central body at the origin.
    pub fn scaled_position(&self) -> DVec2 {
        polar_to_cartesian(self.scaled_distance(), self.current_angle())
    }

    pub fn snapshot(&self) -> OrbitSnapshot {
        OrbitSnapshot {
            scaled_distance: self.scaled_distance(),
            angle: self.current_angle(),
            position: self.scaled_position(),
            paused: self.state.paused,
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    pub fn specific_angular_momentum(&self) -> f64 {
        invariants::specific_angular_momentum(&self.state)
    }

    pub fn specific_orbital_energy(&self) -> f64 {
        invariants::specific_orbital_energy(&self.state, self.constants.gravitational_constant)
    }
}
