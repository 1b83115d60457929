//! Forecast trajectories by re-simulating a cloned system
//!
//! The live system is deep-copied (value semantics, no shared state) and
//! stepped with the Euler integrator; the focus body's position after
//! each step forms the forecast polyline. The live bodies are never
//! touched.

use super::forces::AccelSet;
use super::integrator::euler_integrator;
use super::params::Parameters;
use super::states::{BodyId, NVec2, System};

/// Predict the next `steps` positions of the body identified by `focus`.
///
/// Returns `None` when `focus` is no longer in the live list (absorbed in
/// a merge since it was selected); the caller treats that as "selection
/// cleared". Prediction uses the base step `params.h0`, not the
/// speed-scaled live step.
pub fn predict(
    sys: &System,
    forces: &AccelSet,
    params: &Parameters,
    focus: BodyId,
    steps: usize,
) -> Option<Vec<NVec2>> {
    let index = sys.body_index(focus)?;

    let mut scratch = sys.clone();
    let mut positions = Vec::with_capacity(steps);
    for _ in 0..steps {
        euler_integrator(&mut scratch, forces, params, params.h0);
        positions.push(scratch.bodies[index].x);
    }

    Some(positions)
}
