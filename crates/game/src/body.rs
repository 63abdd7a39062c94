//! Rigid body integration against the collision world.
//!
//! The body is a vertical capsule. Each step applies gravity, then moves one
//! axis at a time (vertical first), stopping flush against whatever it hits
//! and zeroing the velocity component on that axis.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strider_physics::{CollisionWorld, ContentFlags, TraceShape};

/// Gap left between a freshly spawned body and the floor.
const SPAWN_CLEARANCE: f32 = 0.005;

/// Half-height of the ground probe under the body's feet.
const GROUND_PROBE_HALF_HEIGHT: f32 = 0.01;

/// Gap kept between the body and whatever it stops against.
const CONTACT_SKIN: f32 = 0.001;

/// A simulated character body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    /// Center of the body in world space.
    pub position: Vec3,

    /// Velocity in units per second.
    pub velocity: Vec3,

    /// Heading the body faces (radians).
    pub facing_yaw: f32,

    /// Collision shape.
    pub shape: TraceShape,
}

impl RigidBody {
    /// Create a body standing with its feet at `feet`.
    pub fn standing_at(feet: Vec3, shape: TraceShape) -> Self {
        let half_height = shape.half_extents().y;

        Self {
            position: feet + Vec3::Y * (half_height + SPAWN_CLEARANCE),
            velocity: Vec3::ZERO,
            facing_yaw: 0.0,
            shape,
        }
    }

    /// Half-size of the body's bounding box.
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        self.shape.half_extents()
    }

    /// Bottom-center of the body's bounds.
    #[inline]
    pub fn feet(&self) -> Vec3 {
        self.position - Vec3::Y * self.half_extents().y
    }

    /// Check for a walkable surface directly under the feet.
    ///
    /// The probe is a thin box half as wide as the body, so standing on the
    /// very edge of a ledge does not count.
    pub fn is_grounded(&self, world: &CollisionWorld) -> bool {
        let ext = self.half_extents();
        let probe = Vec3::new(ext.x * 0.5, GROUND_PROBE_HALF_HEIGHT, ext.z * 0.5);

        world.overlap_box(self.feet(), probe, ContentFlags::MASK_GROUND)
    }

    /// Advance the body by one step.
    ///
    /// Non-positive or non-finite steps do nothing.
    pub fn integrate(&mut self, world: &CollisionWorld, gravity: f32, delta_time: f32) {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return;
        }

        self.velocity.y -= gravity * delta_time;

        for axis in [Vec3::Y, Vec3::X, Vec3::Z] {
            self.move_along(world, axis, delta_time);
        }
    }

    /// Move along a single world axis, stopping at geometry.
    fn move_along(&mut self, world: &CollisionWorld, axis: Vec3, delta_time: f32) {
        let distance = self.velocity.dot(axis) * delta_time;
        if distance == 0.0 {
            return;
        }

        let end = self.position + axis * distance;
        let trace = world.trace(self.position, end, self.shape, ContentFlags::MASK_GROUND);

        if trace.hit_something() {
            // Back off along the path so the next step starts clear of contact
            let travelled = (trace.end_position - self.position).length();
            let backoff = travelled.min(CONTACT_SKIN) * distance.signum();
            self.position = trace.end_position - axis * backoff;

            // Drop the blocked component
            self.velocity -= axis * self.velocity.dot(axis);
        } else {
            self.position = trace.end_position;
        }
    }
}
