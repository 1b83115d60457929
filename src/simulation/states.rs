//! Core state types for the n-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds mass, kinematic state, radius, color, and the bounded
//!   trail of past positions used for orbit rendering
//! - `System` holds the list of bodies, the current simulation time `t`,
//!   and the id counter used when spawning new bodies
//!
//! Bodies carry a stable [`BodyId`] assigned at spawn so that a selection
//! survives the list shrinking (and reordering) across merges.

use nalgebra::Vector2;
use std::collections::VecDeque;

pub type NVec2 = Vector2<f64>;

/// Maximum number of past positions kept per body for trail rendering.
/// Oldest entries are evicted FIFO once the cap is reached.
pub const TRAIL_CAP: usize = 200;

/// Stable opaque identifier assigned at spawn, never reused for a
/// different body within one `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration, recomputed every step
    pub m: f64, // mass, always > 0
    pub radius: f64, // collision + rendering radius, always > 0
    pub color: [f32; 3], // rendering only
    pub trail: VecDeque<NVec2>, // past positions, most-recent-last
    pub prev_x: Option<NVec2>, // previous position, only the Verlet integrator uses this
}

impl Body {
    pub fn new(id: BodyId, x: NVec2, v: NVec2, m: f64, radius: f64, color: [f32; 3]) -> Self {
        Self {
            id,
            x,
            v,
            a: NVec2::zeros(),
            m,
            radius,
            color,
            trail: VecDeque::with_capacity(TRAIL_CAP),
            prev_x: None,
        }
    }

    /// Advance kinematics by one semi-implicit Euler step:
    /// velocity first, then position from the *new* velocity.
    /// Appends the new position to the trail.
    pub fn advance(&mut self, dt: f64) {
        self.v += self.a * dt;
        self.x += self.v * dt;
        self.push_trail();
    }

    /// Append the current position to the trail, evicting the oldest
    /// entry when the cap is reached.
    pub fn push_trail(&mut self) {
        if self.trail.len() == TRAIL_CAP {
            self.trail.pop_front();
        }
        self.trail.push_back(self.x);
    }

    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // time
    next_id: u32,
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
            next_id: 0,
        }
    }

    /// Create a body and add it to the system, returning its id.
    pub fn spawn(&mut self, x: NVec2, v: NVec2, m: f64, radius: f64, color: [f32; 3]) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, x, v, m, radius, color));
        id
    }

    /// Index of the body with the given id, or `None` if it was absorbed
    /// in a merge since the id was taken.
    pub fn body_index(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize `v`, returning the zero vector when its magnitude is zero
/// (a defined degenerate case, not an error).
pub fn normalize_or_zero(v: NVec2) -> NVec2 {
    let mag = v.norm();
    if mag == 0.0 {
        NVec2::zeros()
    } else {
        v / mag
    }
}

/// Euclidean distance between two points.
pub fn distance(a: NVec2, b: NVec2) -> f64 {
    (a - b).norm()
}
