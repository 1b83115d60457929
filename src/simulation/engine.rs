//! High-level runtime engine settings and per-frame stepping
//!
//! `Engine` selects the integrator and toggles collision merging; `step`
//! dispatches one atomic integration step so the two wired integrators
//! stay drop-in interchangeable for the caller.

use crate::configuration::config::IntegratorConfig;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::{euler_integrator, rk4_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or rk4
    pub collisions: bool, // merge overlapping bodies after each step
    pub prediction: bool, // draw the forecast for the focus body
}

/// Advance the system by one step of `dt` with the selected integrator.
pub fn step(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    integrator: &IntegratorConfig,
    dt: f64,
) {
    match integrator {
        IntegratorConfig::Euler => euler_integrator(sys, forces, params, dt),
        IntegratorConfig::Rk4 => rk4_integrator(sys, forces, params, dt),
    }
}
