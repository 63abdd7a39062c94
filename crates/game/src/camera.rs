//! Mouse-look camera that feeds the movement basis.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strider_physics::CameraBasis;

/// Pitch limit, just short of straight up/down.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Radians per pixel at sensitivity 1.0.
const RADIANS_PER_PIXEL: f32 = 0.001;

/// Camera orientation following the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowCamera {
    /// Heading in radians; 0 looks down +Z, positive turns right.
    pub yaw: f32,

    /// Pitch in radians; positive looks down.
    pub pitch: f32,
}

impl FollowCamera {
    /// Create a level camera facing the given yaw.
    pub fn new(yaw: f32) -> Self {
        Self { yaw, pitch: 0.0 }
    }

    /// Turn the camera by a mouse delta in pixels.
    ///
    /// Moving the mouse right turns right, moving it down looks down.
    pub fn apply_mouse(&mut self, delta: (f32, f32), sensitivity: f32) {
        let scale = sensitivity * RADIANS_PER_PIXEL;

        self.yaw = (self.yaw + delta.0 * scale).rem_euclid(TAU);
        self.pitch = (self.pitch + delta.1 * scale).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Basis used to resolve movement input.
    pub fn basis(&self) -> CameraBasis {
        CameraBasis::from_angles(self.yaw, self.pitch)
    }

    /// Get the forward direction vector.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.basis().forward
    }
}
