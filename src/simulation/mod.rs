pub mod collisions;
pub mod energy;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod prediction;
pub mod scenario;
pub mod states;
