pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, NVec2, System, TRAIL_CAP};
pub use simulation::params::Parameters;
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::{euler_integrator, rk4_integrator, verlet_integrator};
pub use simulation::collisions::{merge_bodies, resolve_collisions};
pub use simulation::energy::compute_energy;
pub use simulation::prediction::predict;
pub use simulation::engine::{step, Engine};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, ScenarioConfig,
};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_step};
