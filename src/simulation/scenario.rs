//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - optional focus body for the prediction overlay
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, NVec2, System};

pub const DEFAULT_PREDICTION_STEPS: usize = 30;

const SUN_COLOR: [f32; 3] = [1.0, 0.9, 0.0];
const PLANET_COLOR: [f32; 3] = [1.0, 0.0, 0.8];
const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// engine settings, parameters, current system state, the set of active
/// force laws, and the currently focused body (if any).
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub focus: Option<BodyId>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime bodies with spawned ids
        let mut system = System::new();
        let mut ids = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let id = system.spawn(
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.m,
                bc.radius,
                bc.color.unwrap_or(DEFAULT_COLOR),
            );
            ids.push(id);
        }

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            speed: p_cfg.speed,
            G: p_cfg.G,
            prediction_steps: p_cfg.prediction_steps.unwrap_or(DEFAULT_PREDICTION_STEPS),
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            integrator: e_cfg.integrator,
            collisions: e_cfg.collisions,
            prediction: e_cfg.prediction.unwrap_or(false),
        };

        // Focus: config names a body by list index, resolve to its id
        let focus = e_cfg.focus.and_then(|i| ids.get(i).copied());

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity);

        Self {
            engine,
            parameters,
            system,
            forces,
            focus,
        }
    }

    /// The classic starter system: a heavy sun at the origin and one
    /// planet on a circular orbit at distance 200, tangential speed
    /// `sqrt(G * m_sun / 200)`.
    pub fn sun_and_planet(parameters: Parameters, engine: Engine) -> Self {
        let mut system = System::new();
        let sun_mass = 10000.0;
        system.spawn(NVec2::zeros(), NVec2::zeros(), sun_mass, 20.0, SUN_COLOR);

        let distance_from_sun = 200.0;
        let planet_speed = (parameters.G * sun_mass / distance_from_sun).sqrt();
        let planet = system.spawn(
            NVec2::new(distance_from_sun, 0.0),
            NVec2::new(0.0, -planet_speed),
            10.0,
            8.0,
            PLANET_COLOR,
        );

        Self {
            engine,
            parameters,
            system,
            forces: AccelSet::new().with(NewtonianGravity),
            focus: Some(planet),
        }
    }
}
