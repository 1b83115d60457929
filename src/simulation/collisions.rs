//! Collision resolution through momentum-conserving mergers
//!
//! Overlapping bodies merge into a single body that conserves total mass,
//! total momentum, and volume (constant-density assumption, so the merged
//! radius is the cube root of the summed cubed radii).

use super::states::{Body, NVec2};

/// Merge two bodies, conserving mass and momentum.
///
/// Position and velocity are mass-weighted averages; the merged body
/// keeps `a`'s id and color (`a` is always the lower-indexed input).
/// The trail starts fresh and fills on subsequent steps.
pub fn merge_bodies(a: &Body, b: &Body) -> Body {
    let m = a.m + b.m;
    let x = (a.x * a.m + b.x * b.m) / m;
    let v = (a.momentum() + b.momentum()) / m;
    // volume-conserving: r^3 = r_a^3 + r_b^3
    let radius = (a.radius.powi(3) + b.radius.powi(3)).cbrt();

    Body::new(a.id, x, v, m, radius, a.color)
}

/// Resolve overlaps in a single ordered pass, returning the new body list.
///
/// Iterates bodies by index; each unconsumed body scans forward for the
/// *first* unconsumed partner whose center distance is below the radius
/// sum and merges with it. First match wins, not nearest, and a body
/// merges with at most one partner per pass; a dense pile-up may take
/// several frames to fully coalesce. Survivors keep their relative order,
/// so the output is same-or-shorter than the input.
pub fn resolve_collisions(bodies: &[Body]) -> Vec<Body> {
    let n = bodies.len();
    let mut consumed = vec![false; n];
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        if consumed[i] {
            continue;
        }
        let mut merged = None;
        for j in (i + 1)..n {
            if consumed[j] {
                continue;
            }
            let gap: NVec2 = bodies[i].x - bodies[j].x;
            if gap.norm() < bodies[i].radius + bodies[j].radius {
                merged = Some(merge_bodies(&bodies[i], &bodies[j]));
                consumed[j] = true;
                break;
            }
        }
        match merged {
            Some(b) => out.push(b),
            None => out.push(bodies[i].clone()),
        }
    }

    out
}
