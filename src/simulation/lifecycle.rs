//! Parameter changes and run-state transitions.

use serde::{Deserialize, Serialize};

use super::OrbitSimulation;
use crate::{
    config::SECONDS_PER_DAY,
    error::{Result, SimulationError},
};

/// Whether ticks currently advance the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Paused,
}

impl OrbitSimulation {
    pub fn run_state(&self) -> RunState {
        if self.state.paused {
            RunState::Paused
        } else {
            RunState::Running
        }
    }

    pub fn mass_multiplier(&self) -> f64 {
        self.mass_multiplier
    }

    /// Scales the central mass relative to the reference mass.
    ///
    /// Zero is accepted and yields an unaccelerated, unbound trajectory.
    pub fn set_mass_multiplier(&mut self, multiplier: f64) -> Result<()> {
        if !(multiplier.is_finite() && multiplier >= 0.0) {
            return Err(SimulationError::InvalidMassMultiplier(multiplier));
        }
        self.mass_multiplier = multiplier;
        self.state.central_mass_kg = self.constants.reference_central_mass * multiplier;
        log::debug!(
            "mass multiplier set to {multiplier} ({} kg)",
            self.state.central_mass_kg
        );
        Ok(())
    }

    /// Simulated seconds per real second.
    pub fn simulation_speed(&self) -> f64 {
        self.state.simulation_speed
    }

    /// Changes how much simulated time a tick covers, starting with the next tick.
    pub fn set_simulation_speed(&mut self, seconds_per_second: f64) -> Result<()> {
        if !(seconds_per_second.is_finite() && seconds_per_second > 0.0) {
            return Err(SimulationError::InvalidSimulationSpeed(seconds_per_second));
        }
        self.state.simulation_speed = seconds_per_second;
        log::debug!("simulation speed set to {seconds_per_second} s/s");
        Ok(())
    }

    pub fn set_simulation_speed_days_per_second(&mut self, days: f64) -> Result<()> {
        self.set_simulation_speed(days * SECONDS_PER_DAY)
    }

    /// Puts the body back at its initial position and velocity. Mass, speed
    /// and the pause flag are kept.
    pub fn reset(&mut self) {
        self.state.reset_motion(self.initial);
        log::info!("orbit reset to initial conditions");
    }

    /// Full restart: initial motion, reference mass, running.
    pub fn restart(&mut self) {
        self.state.reset_motion(self.initial);
        self.mass_multiplier = 1.0;
        self.state.central_mass_kg = self.constants.reference_central_mass;
        self.state.paused = false;
        self.elapsed_seconds = 0.0;
        log::info!("orbit restarted");
    }

    pub fn pause(&mut self) {
        if !self.state.paused {
            log::info!("orbit paused");
        }
        self.state.paused = true;
    }

    pub fn resume(&mut self) {
        if self.state.paused {
            log::info!("orbit resumed");
        }
        self.state.paused = false;
    }

    /// Called by the renderer once its geometric overlap test fires.
    pub fn report_collision(&mut self) {
        log::info!(
            "collision reported at {:.3e} m, pausing",
            self.state.distance.value
        );
        self.state.paused = true;
    }
}
