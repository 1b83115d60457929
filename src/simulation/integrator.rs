//! Fixed-step time integrators for the n-body system
//!
//! Provides semi-implicit Euler, classical RK4, and a position-Verlet
//! alternative, all driven by `AccelSet` and `Parameters`. The three
//! share one contract: advance every body by `dt` atomically (no body
//! may observe another body's already-updated state within the step)
//! and append the new position to each body's trail.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one semi-implicit Euler step.
///
/// Accumulates pairwise accelerations into each body, then kicks velocity
/// and drifts position off the *new* velocity (`Body::advance`). The
/// acceleration pass reads only pre-step positions, so the update is
/// atomic across bodies.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, params, &mut acc);

    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.a = *a;
        b.advance(dt);
    }

    sys.t += dt;
}

/// Advance the system by one classical 4th-order Runge-Kutta step.
///
/// Snapshots every body's (x, v), evaluates the four stage derivatives on
/// detached stage states (intermediate stages are not real body states),
/// then writes back `y + (k1 + 2 k2 + 2 k3 + k4) / 6` and appends the
/// trail entry exactly as the Euler path does.
pub fn rk4_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // y_n: per-body (position, velocity) snapshot
    let x0: Vec<NVec2> = sys.bodies.iter().map(|b| b.x).collect();
    let v0: Vec<NVec2> = sys.bodies.iter().map(|b| b.v).collect();

    // Scratch system for stage evaluations: same bodies/masses, stage
    // positions written in before each force pass
    let mut stage = sys.clone();
    let mut acc = vec![NVec2::zeros(); n];

    // Derivative of (x, v) is (v, a); each k holds (dx, dv) = dt * f
    let eval = |stage: &mut System,
                acc: &mut Vec<NVec2>,
                sx: &[NVec2],
                sv: &[NVec2]|
     -> (Vec<NVec2>, Vec<NVec2>) {
        for (b, x) in stage.bodies.iter_mut().zip(sx.iter()) {
            b.x = *x;
        }
        forces.accumulate_accels(&*stage, params, acc);
        let dx: Vec<NVec2> = sv.iter().map(|v| dt * *v).collect();
        let dv: Vec<NVec2> = acc.iter().map(|a| dt * *a).collect();
        (dx, dv)
    };

    // k1 from y_n
    let (k1x, k1v) = eval(&mut stage, &mut acc, &x0, &v0);

    // k2 from y_n + k1/2
    let s2x: Vec<NVec2> = x0.iter().zip(k1x.iter()).map(|(x, k)| *x + 0.5 * *k).collect();
    let s2v: Vec<NVec2> = v0.iter().zip(k1v.iter()).map(|(v, k)| *v + 0.5 * *k).collect();
    let (k2x, k2v) = eval(&mut stage, &mut acc, &s2x, &s2v);

    // k3 from y_n + k2/2
    let s3x: Vec<NVec2> = x0.iter().zip(k2x.iter()).map(|(x, k)| *x + 0.5 * *k).collect();
    let s3v: Vec<NVec2> = v0.iter().zip(k2v.iter()).map(|(v, k)| *v + 0.5 * *k).collect();
    let (k3x, k3v) = eval(&mut stage, &mut acc, &s3x, &s3v);

    // k4 from y_n + k3
    let s4x: Vec<NVec2> = x0.iter().zip(k3x.iter()).map(|(x, k)| *x + *k).collect();
    let s4v: Vec<NVec2> = v0.iter().zip(k3v.iter()).map(|(v, k)| *v + *k).collect();
    let (k4x, k4v) = eval(&mut stage, &mut acc, &s4x, &s4v);

    // y_n+1 = y_n + (k1 + 2 k2 + 2 k3 + k4) / 6
    for (i, b) in sys.bodies.iter_mut().enumerate() {
        b.x = x0[i] + (k1x[i] + 2.0 * k2x[i] + 2.0 * k3x[i] + k4x[i]) / 6.0;
        b.v = v0[i] + (k1v[i] + 2.0 * k2v[i] + 2.0 * k3v[i] + k4v[i]) / 6.0;
        b.a = k1v[i] / dt; // acceleration at the step start
        b.push_trail();
    }

    sys.t += dt;
}

/// Advance the system by one position-Verlet step.
///
/// An alternative to the Euler/RK4 pair; present but not selectable
/// through [`IntegratorConfig`](crate::configuration::config::IntegratorConfig).
/// Each body's `prev_x` is seeded on first use from `x - v * dt` and
/// carried across steps; velocity is backed out as `(x_new - x) / dt`.
pub fn verlet_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let mut acc = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&*sys, params, &mut acc);

    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.a = *a;
        let prev = b.prev_x.unwrap_or(b.x - b.v * dt);
        // x_n+1 = 2 x_n - x_n-1 + a dt^2
        let new_x = 2.0 * b.x - prev + b.a * (dt * dt);
        b.prev_x = Some(b.x);
        b.v = (new_x - b.x) / dt;
        b.x = new_x;
        b.push_trail();
    }

    sys.t += dt;
}
