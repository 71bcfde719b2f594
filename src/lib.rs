//! Orbit Sim – two-body orbit integrator for Rust.
//!
//! This crate advances a light body orbiting a fixed massive body, frame by
//! frame, and exposes its polar coordinates in display units for a renderer.
//! Integration runs in physical units with many semi-implicit Euler sub-steps
//! per frame; rendering, input and collision geometry stay with the caller.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod simulation;
pub mod utils;

pub use glam::DVec2;

pub use config::SimulationConfig;
pub use crate::core::{
    state::{Coordinate, InitialConditions, OrbitState},
    units::Constants,
};
pub use dynamics::{
    forces::{Accelerations, CentralForce},
    integrator::SubstepIntegrator,
};
pub use error::{Result, SimulationError};
pub use simulation::{OrbitSimulation, OrbitSnapshot, RunState};
