//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and the direct O(n^2) Newtonian
//! gravity term. Contributions are summed per body into a single
//! acceleration buffer.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, params, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body.
/// `params` is read-only shared state; gravity reads `params.G` at call
/// time so a slider change takes effect on the very next step.
pub trait Acceleration {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]);
}

/// Direct-summation Newtonian gravity.
///
/// Coincident bodies (`r == 0`) contribute nothing to each other; the
/// pair is skipped rather than dividing by zero.
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // no bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // r points from i to j: i feels a pull along +r,
                // j feels a pull along -r
                let r = bj.x - xi;
                let r2 = r.norm_squared();
                if r2 == 0.0 {
                    // coincident positions, defined as zero contribution
                    continue;
                }

                // a = G m r / |r|^3  (the |r|^3 folds in the unit vector)
                let inv_r = r2.sqrt().recip();
                let inv_r3 = inv_r * inv_r * inv_r;
                let coef = params.G * inv_r3;

                // Newton's third law: equal and opposite
                out[i] += coef * bj.m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
