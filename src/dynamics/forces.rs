use crate::{
    core::state::OrbitState,
    error::{Result, SimulationError},
};

/// Radial and angular accelerations for one sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accelerations {
    pub distance: f64,
    pub angle: f64,
}

/// Inverse-square central force written in polar coordinates.
///
/// The equations follow from the Euler–Lagrange equations of the two-body
/// Lagrangian with the central body held fixed:
///
/// * `r'' = r θ'² − G M / r²`
/// * `θ'' = −2 r' θ' / r`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralForce {
    pub gravitational_constant: f64,
}

impl CentralForce {
    pub fn new(gravitational_constant: f64) -> Self {
        Self {
            gravitational_constant,
        }
    }

    /// Centrifugal term minus gravitational attraction.
    pub fn distance_acceleration(&self, state: &OrbitState) -> Result<f64> {
        let r = checked_distance(state)?;
        let angular_speed = state.angle.speed;
        Ok(r * angular_speed * angular_speed
            - self.gravitational_constant * state.central_mass_kg / (r * r))
    }

    /// Coupling term that keeps `r² θ'` constant.
    pub fn angle_acceleration(&self, state: &OrbitState) -> Result<f64> {
        let r = checked_distance(state)?;
        Ok(-2.0 * state.distance.speed * state.angle.speed / r)
    }

    /// Evaluates both accelerations from the same state.
    pub fn accelerations(&self, state: &OrbitState) -> Result<Accelerations> {
        Ok(Accelerations {
            distance: self.distance_acceleration(state)?,
            angle: self.angle_acceleration(state)?,
        })
    }
}

fn checked_distance(state: &OrbitState) -> Result<f64> {
    let r = state.distance.value;
    if r.is_finite() && r > 0.0 {
        Ok(r)
    } else {
        Err(SimulationError::DegenerateDistance { distance: r })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{GRAVITATIONAL_CONSTANT, REFERENCE_CENTRAL_MASS},
        core::state::{Coordinate, InitialConditions},
    };

    fn force() -> CentralForce {
        CentralForce::new(GRAVITATIONAL_CONSTANT)
    }

    #[test]
    fn reference_orbit_is_nearly_balanced() {
        let state = OrbitState::new(InitialConditions::REFERENCE, 1.0);
        let r = state.distance.value;
        let gravity = GRAVITATIONAL_CONSTANT * REFERENCE_CENTRAL_MASS / (r * r);
        let acc = force().distance_acceleration(&state).unwrap();
        assert!(acc.abs() < 1e-3 * gravity, "residual = {acc}");
    }

    #[test]
    fn zero_mass_leaves_only_centrifugal_term() {
        let mut state = OrbitState::new(InitialConditions::REFERENCE, 1.0);
        state.central_mass_kg = 0.0;
        let r = state.distance.value;
        let w = state.angle.speed;
        let acc = force().distance_acceleration(&state).unwrap();
        assert_eq!(acc, r * w * w);
        assert!(acc > 0.0);
    }

    #[test]
    fn angle_acceleration_opposes_outward_motion() {
        let mut state = OrbitState::new(InitialConditions::REFERENCE, 1.0);
        state.distance.speed = 1_000.0;
        assert!(force().angle_acceleration(&state).unwrap() < 0.0);

        state.distance.speed = -1_000.0;
        assert!(force().angle_acceleration(&state).unwrap() > 0.0);

        state.distance.speed = 0.0;
        assert_eq!(force().angle_acceleration(&state).unwrap(), 0.0);
    }

    #[test]
    fn degenerate_distance_is_reported() {
        let mut state = OrbitState::new(InitialConditions::REFERENCE, 1.0);
        for r in [0.0, -1.0, f64::NAN] {
            state.distance = Coordinate::new(r, 0.0);
            assert!(matches!(
                force().accelerations(&state),
                Err(SimulationError::DegenerateDistance { .. })
            ));
        }
    }
}
