use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::{euler_integrator, rk4_integrator};
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};

/// Helper to build a deterministic `System` of size `n`, no rand needed
fn make_system(n: usize) -> System {
    let mut sys = System::new();
    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
        sys.spawn(x, NVec2::zeros(), 10.0, 2.0, [1.0, 1.0, 1.0]);
    }
    sys
}

fn make_params() -> Parameters {
    Parameters {
        h0: 0.1,
        speed: 1.0,
        G: 0.1,
        prediction_steps: 30,
    }
}

/// Time one direct gravity accumulation pass for a range of n.
/// The pairwise sum is O(n^2), so expect ~4x per doubling.
pub fn bench_gravity() {
    let ns = [8, 16, 32, 64, 128, 256, 512];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let gravity = NewtonianGravity;
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(&sys, &params, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(&sys, &params, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:4}, gravity pass = {dt_direct:9.6} s");
    }
}

/// Compare per-step cost of the Euler and RK4 integrators for a range
/// of n. RK4 does four force passes per step, so roughly 4x Euler.
pub fn bench_step() {
    let ns = [8, 16, 32, 64, 128, 256];
    let steps = 50;

    for n in ns {
        let sys_template = make_system(n);
        let params = make_params();
        let forces = AccelSet::new().with(NewtonianGravity);

        // Euler
        let mut sys_euler = sys_template.clone();
        euler_integrator(&mut sys_euler, &forces, &params, params.h0); // warm-up

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys_euler, &forces, &params, params.h0);
        }
        let euler_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // RK4
        let mut sys_rk4 = sys_template.clone();
        rk4_integrator(&mut sys_rk4, &forces, &params, params.h0); // warm-up

        let t1 = Instant::now();
        for _ in 0..steps {
            rk4_integrator(&mut sys_rk4, &forces, &params, params.h0);
        }
        let rk4_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {n:4}, euler step = {euler_per_step:9.6} s,   rk4 step = {rk4_per_step:9.6} s"
        );
    }
}
