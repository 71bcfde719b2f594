//! Simulation dynamics: the central force law, the sub-stepped integrator and
//! conserved-quantity diagnostics.

pub mod forces;
pub mod integrator;
pub mod invariants;

pub use forces::{Accelerations, CentralForce};
pub use integrator::SubstepIntegrator;
pub use invariants::{is_bound, specific_angular_momentum, specific_orbital_energy};
