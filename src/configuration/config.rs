//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (integrator, collisions, prediction)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler"     # or "rk4"
//!   collisions: true        # merge overlapping bodies
//!   prediction: true        # draw a forecast for the focus body
//!   focus: 1                # index into `bodies` of the forecast target
//!
//! parameters:
//!   h0: 0.1                 # base step size
//!   speed: 1.0              # speed multiplier for live stepping
//!   G: 0.1                  # gravitational constant
//!   prediction_steps: 30    # forecast horizon
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 10000.0
//!     radius: 20.0
//!     color: [ 1.0, 0.9, 0.0 ]
//!   - x: [ 200.0, 0.0 ]
//!     v: [ 0.0, -2.236 ]
//!     m: 10.0
//!     radius: 8.0
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation (`Scenario`).

use serde::Deserialize;

/// Which integrator the engine steps with.
/// `integrator: "euler"` or `integrator: "rk4"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Semi-implicit Euler. Cheap, symplectic, one force pass per step
    Euler,

    #[serde(rename = "rk4")] // Classical 4th-order Runge-Kutta, higher accuracy per step, four force passes
    Rk4,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the system state
    pub collisions: bool, // `true` - overlapping bodies merge after each step
    pub prediction: Option<bool>, // `true` - overlay a forecast trajectory for the focus body
    pub focus: Option<usize>, // index into `bodies` of the forecast target
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64,    // base step size
    pub speed: f64, // speed multiplier applied to h0 for live stepping
    pub G: f64,     // gravitational constant
    pub prediction_steps: Option<usize>, // forecast steps, defaults to 30
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>,  // initial position in simulation units
    pub v: Vec<f64>,  // initial velocity in simulation units per time unit
    pub m: f64,       // mass, must be positive
    pub radius: f64,  // radius, used for merging and for rendering
    pub color: Option<[f32; 3]>, // sRGB in 0..1, defaults to white
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // initial state of the system
}
