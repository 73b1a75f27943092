//! Minimal rigid body for the ship
//!
//! Gameplay only ever calls [`PhysicsBody::apply_force`]. Turning forces into
//! motion is the integrator's job, run once per frame after the update.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rect;

/// Gravity used for bodies that opt into it (units/s²)
pub const GRAVITY: Vec2 = Vec2::new(0.0, -9.8);

/// A body attached to a scene node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsBody {
    /// Static bodies ignore forces
    pub dynamic: bool,
    pub affected_by_gravity: bool,
    pub mass: f32,
    pub velocity: Vec2,
    /// Force accumulated since the last integration step
    pub pending_force: Vec2,
}

impl PhysicsBody {
    pub fn new(mass: f32) -> Self {
        Self {
            dynamic: true,
            affected_by_gravity: true,
            mass,
            velocity: Vec2::ZERO,
            pending_force: Vec2::ZERO,
        }
    }

    /// Queue a force for the next integration step
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.pending_force += force;
    }

    /// Semi-implicit Euler step. Returns the new position.
    pub fn integrate(&mut self, pos: Vec2, dt: f32) -> Vec2 {
        let force = std::mem::take(&mut self.pending_force);
        if !self.dynamic || self.mass <= 0.0 {
            return pos;
        }

        let mut accel = force / self.mass;
        if self.affected_by_gravity {
            accel += GRAVITY;
        }
        self.velocity += accel * dt;
        pos + self.velocity * dt
    }

    /// Keep a body of `size` at `pos` inside `bounds`, killing velocity into the wall
    pub fn confine(&mut self, pos: Vec2, size: Vec2, bounds: Rect) -> Vec2 {
        let half = size / 2.0;
        let lo = bounds.min + half;
        let hi = (bounds.max - half).max(lo);
        let clamped = pos.clamp(lo, hi);

        if clamped.x != pos.x {
            self.velocity.x = 0.0;
        }
        if clamped.y != pos.y {
            self.velocity.y = 0.0;
        }
        clamped
    }
}
