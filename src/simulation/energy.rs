//! Total energy diagnostic
//!
//! Read-only; the result is displayed/asserted on, never fed back into
//! integration.

use super::states::System;

/// Total kinetic and potential energy of the system.
///
/// Kinetic is `sum 1/2 m v^2`; potential is `sum over pairs of
/// -G m_i m_j / r`, with coincident pairs (`r == 0`) contributing zero,
/// the same degenerate-case policy gravity uses.
pub fn compute_energy(sys: &System, g: f64) -> (f64, f64) {
    let kinetic: f64 = sys.bodies.iter().map(|b| b.kinetic_energy()).sum();

    let mut potential = 0.0;
    let n = sys.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (sys.bodies[i].x - sys.bodies[j].x).norm();
            if r != 0.0 {
                potential += -g * sys.bodies[i].m * sys.bodies[j].m / r;
            }
        }
    }

    (kinetic, potential)
}
