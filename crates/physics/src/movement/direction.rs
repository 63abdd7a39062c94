//! Camera-relative movement direction.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Camera orientation as seen by the movement code.
///
/// `forward` and `right` are the camera's world-space axes. They may point
/// up or down; only their horizontal projection is used for movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraBasis {
    /// Camera forward vector.
    pub forward: Vec3,

    /// Camera right vector.
    pub right: Vec3,

    /// Heading around the vertical axis (radians).
    pub yaw: f32,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self::from_angles(0.0, 0.0)
    }
}

impl CameraBasis {
    /// Build a basis from yaw and pitch (radians).
    ///
    /// Yaw 0 looks down +Z with +X on the right; positive yaw turns right.
    /// Positive pitch looks down.
    pub fn from_angles(yaw: f32, pitch: f32) -> Self {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();

        Self {
            forward: Vec3::new(cos_pitch * sin_yaw, -sin_pitch, cos_pitch * cos_yaw),
            right: Vec3::new(cos_yaw, 0.0, -sin_yaw),
            yaw,
        }
    }

    /// Forward vector flattened onto the ground plane, or zero.
    #[inline]
    pub fn planar_forward(&self) -> Vec3 {
        flatten(self.forward)
    }

    /// Right vector flattened onto the ground plane, or zero.
    #[inline]
    pub fn planar_right(&self) -> Vec3 {
        flatten(self.right)
    }
}

/// Resolve movement axes into a world-space direction.
///
/// `axes.x` is lateral input (positive = right), `axes.y` is forward input
/// (positive = forward). The result is horizontal and either unit length or
/// zero.
pub fn resolve_move_direction(axes: Vec2, camera: &CameraBasis) -> Vec3 {
    let forward = camera.planar_forward();
    let right = camera.planar_right();

    (forward * axes.y + right * axes.x).normalize_or_zero()
}

/// Drop the vertical component and normalize.
fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}
