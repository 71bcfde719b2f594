use crate::{
    core::{state::OrbitState, units::Constants},
    dynamics::forces::CentralForce,
    error::{Result, SimulationError},
    utils::math::normalize_angle,
};

/// Fixed sub-step semi-implicit Euler integrator.
///
/// One call to [`SubstepIntegrator::step`] covers a single external frame and
/// splits it into `substeps` equal increments. Many small increments keep the
/// explicit scheme stable for an inverse-square force.
#[derive(Debug, Clone)]
pub struct SubstepIntegrator {
    substeps: u32,
    force: CentralForce,
}

impl SubstepIntegrator {
    pub fn new(substeps: u32, gravitational_constant: f64) -> Result<Self> {
        if substeps == 0 {
            return Err(SimulationError::InvalidConfig(
                "substeps must be at least 1".into(),
            ));
        }
        Ok(Self {
            substeps,
            force: CentralForce::new(gravitational_constant),
        })
    }

    /// Builds from constants of an already validated config.
    pub(crate) fn from_constants(constants: &Constants) -> Self {
        Self {
            substeps: constants.substeps,
            force: CentralForce::new(constants.gravitational_constant),
        }
    }

    pub fn substeps(&self) -> u32 {
        self.substeps
    }

    pub fn force(&self) -> &CentralForce {
        &self.force
    }

    /// Sub-step length for a frame of `external_dt` real seconds.
    pub fn substep_dt(&self, state: &OrbitState, external_dt: f64) -> f64 {
        state.simulation_speed * external_dt / self.substeps as f64
    }

    /// Advances `state` by one external frame.
    ///
    /// Paused states are left untouched. On failure `state` keeps its
    /// pre-call value.
    pub fn step(&self, state: &mut OrbitState, external_dt: f64) -> Result<()> {
        if state.paused {
            return Ok(());
        }
        if !(external_dt.is_finite() && external_dt >= 0.0) {
            return Err(SimulationError::InvalidTimeDelta(external_dt));
        }

        let dt = self.substep_dt(state, external_dt);
        let mut next = *state;
        for _ in 0..self.substeps {
            self.substep(&mut next, dt)?;
        }
        next.angle.value = normalize_angle(next.angle.value);

        if !next.is_finite() {
            return Err(SimulationError::NonFiniteState);
        }
        if next.distance.value <= 0.0 {
            return Err(SimulationError::DegenerateDistance {
                distance: next.distance.value,
            });
        }
        *state = next;
        Ok(())
    }

    /// Both accelerations come from the state at the start of the sub-step,
    /// then each coordinate takes a kick followed by a drift.
    pub fn substep(&self, state: &mut OrbitState, dt: f64) -> Result<()> {
        let acc = self.force.accelerations(state)?;

        state.distance.speed += dt * acc.distance;
        state.distance.value += dt * state.distance.speed;

        state.angle.speed += dt * acc.angle;
        state.angle.value += dt * state.angle.speed;
        Ok(())
    }
}
