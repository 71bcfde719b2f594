//! Error types for the orbit engine.
//!
//! All fallible operations return [`SimulationError`] through the crate-wide
//! [`Result`] alias.

use thiserror::Error;

/// Errors raised by parameter validation and by the integrator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Mass multiplier was negative or not finite.
    #[error("invalid mass multiplier: {0} (must be finite and >= 0)")]
    InvalidMassMultiplier(f64),

    /// Simulation speed was non-positive or not finite.
    #[error("invalid simulation speed: {0} (must be finite and > 0)")]
    InvalidSimulationSpeed(f64),

    /// External frame delta was negative or not finite.
    #[error("invalid time delta: {0} s")]
    InvalidTimeDelta(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Orbital distance collapsed to zero or below, so the force law is undefined.
    #[error("degenerate orbital distance: {distance} m")]
    DegenerateDistance { distance: f64 },

    /// A sub-step produced NaN or infinity.
    #[error("integration produced a non-finite state")]
    NonFiniteState,
}

/// Convenient Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
