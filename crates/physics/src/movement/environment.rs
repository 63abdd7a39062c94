//! The world as seen by the locomotion controller.
//!
//! The controller never reaches for physics, input or camera state on its own.
//! Everything it reads or writes goes through an [`Environment`] handed to it at
//! construction, which keeps the state machine testable with plain fakes.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::direction::CameraBasis;

/// Input sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Movement axes in `[-1, 1]`: `x` = lateral (right positive),
    /// `y` = forward (forward positive).
    pub axes: Vec2,

    /// Jump was pressed this tick (edge, not level).
    pub jump_pressed: bool,

    /// Sprint modifier is held.
    pub sprint_held: bool,

    /// Any key or button at all is held.
    pub any_active: bool,
}

impl InputFrame {
    /// An input frame with nothing pressed.
    pub const NONE: Self = Self {
        axes: Vec2::ZERO,
        jump_pressed: false,
        sprint_held: false,
        any_active: false,
    };

    /// Frame with only movement axes set.
    ///
    /// `any_active` follows the axes, as holding a movement key counts as
    /// input activity.
    pub fn moving(axes: Vec2) -> Self {
        Self {
            axes,
            any_active: axes != Vec2::ZERO,
            ..Self::NONE
        }
    }

    /// Check if either movement axis is non-zero.
    #[inline]
    pub fn has_movement(&self) -> bool {
        self.axes.x != 0.0 || self.axes.y != 0.0
    }
}

/// Capabilities the locomotion controller consumes.
///
/// Queries are synchronous and read the world as it is right now; the
/// controller calls each of them at most a handful of times per tick and never
/// caches their results across ticks.
pub trait Environment {
    /// The body is standing on a walkable surface.
    fn is_grounded(&self) -> bool;

    /// Sweep the body's capsule from its current bounds along `direction`.
    ///
    /// Returns true if something solid lies within `max_distance`.
    fn sweep_capsule(&self, direction: Vec3, max_distance: f32) -> bool;

    /// Current camera orientation.
    fn camera_basis(&self) -> CameraBasis;

    /// Input for this tick.
    fn input(&self) -> InputFrame;

    /// Rigid-body velocity.
    fn velocity(&self) -> Vec3;

    /// Overwrite the rigid-body velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Turn the body to face the given yaw (radians).
    fn set_facing_yaw(&mut self, yaw: f32);
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn is_grounded(&self) -> bool {
        (**self).is_grounded()
    }

    fn sweep_capsule(&self, direction: Vec3, max_distance: f32) -> bool {
        (**self).sweep_capsule(direction, max_distance)
    }

    fn camera_basis(&self) -> CameraBasis {
        (**self).camera_basis()
    }

    fn input(&self) -> InputFrame {
        (**self).input()
    }

    fn velocity(&self) -> Vec3 {
        (**self).velocity()
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        (**self).set_velocity(velocity)
    }

    fn set_facing_yaw(&mut self, yaw: f32) {
        (**self).set_facing_yaw(yaw)
    }
}
