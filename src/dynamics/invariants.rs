//! Conserved quantities of the central-force problem, used to monitor drift.

use crate::core::state::OrbitState;

/// Specific angular momentum `r² θ'` (m²/s).
pub fn specific_angular_momentum(state: &OrbitState) -> f64 {
    let r = state.distance.value;
    r * r * state.angle.speed
}

/// Specific orbital energy `½ (r'² + r² θ'²) − G M / r` (J/kg).
///
/// Negative for bound orbits, zero or positive for escape trajectories.
pub fn specific_orbital_energy(state: &OrbitState, gravitational_constant: f64) -> f64 {
    let r = state.distance.value;
    let tangential = r * state.angle.speed;
    let kinetic = 0.5 * (state.distance.speed * state.distance.speed + tangential * tangential);
    kinetic - gravitational_constant * state.central_mass_kg / r
}

pub fn is_bound(state: &OrbitState, gravitational_constant: f64) -> bool {
    specific_orbital_energy(state, gravitational_constant) < 0.0
}
