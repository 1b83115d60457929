//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime knobs the surrounding application owns
//! and the core reads each step:
//! - base step size and speed multiplier (`h0`, `speed`),
//! - gravitational constant (`G`),
//! - forecast horizon for trajectory prediction (`prediction_steps`)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // base step size
    pub speed: f64, // speed multiplier applied to h0 for live stepping
    pub G: f64, // gravitational constant
    pub prediction_steps: usize, // forecast steps for the prediction overlay
}

impl Parameters {
    /// Effective step size for one live frame.
    pub fn step_size(&self) -> f64 {
        self.h0 * self.speed
    }
}
