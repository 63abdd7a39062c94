//! Trace results and shapes for collision queries.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::flags::ContentFlags;

/// Result of sweeping a shape through the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceResult {
    /// How far along the sweep we got before touching something.
    ///
    /// - `1.0` = traveled the full distance (no collision)
    /// - `0.0` = blocked immediately at the start
    pub fraction: f32,

    /// Center of the shape at the furthest free position.
    pub end_position: Vec3,

    /// Approximate surface normal at the impact, `None` if nothing was hit.
    pub hit_normal: Option<Vec3>,

    /// Content flags of what was hit.
    pub hit_contents: ContentFlags,

    /// Whether the shape already overlapped geometry at the start.
    pub started_in_solid: bool,
}

impl Default for TraceResult {
    fn default() -> Self {
        Self::no_hit(Vec3::ZERO)
    }
}

impl TraceResult {
    /// Create a trace result indicating no collision occurred.
    pub fn no_hit(end_position: Vec3) -> Self {
        Self {
            fraction: 1.0,
            end_position,
            hit_normal: None,
            hit_contents: ContentFlags::EMPTY,
            started_in_solid: false,
        }
    }

    /// Check if this trace hit something.
    #[inline]
    pub fn hit_something(&self) -> bool {
        self.fraction < 1.0
    }
}

/// Shape used for collision queries.
///
/// Shapes are positioned by their center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TraceShape {
    /// A vertical capsule (pill shape).
    Capsule {
        /// Radius of the capsule cylinder and end caps.
        radius: f32,
        /// Total height from bottom of lower cap to top of upper cap.
        height: f32,
    },

    /// An axis-aligned box.
    Box {
        /// Half-size in each axis (x, y, z).
        half_extents: Vec3,
    },
}

impl TraceShape {
    /// A standing player body: 1m wide, 2m tall.
    pub const PLAYER: Self = Self::Capsule {
        radius: 0.5,
        height: 2.0,
    };

    /// Capsule whose cap centers sit `half_segment` above and below its
    /// center.
    pub fn capsule_between_caps(half_segment: f32, radius: f32) -> Self {
        Self::Capsule {
            radius,
            height: 2.0 * (half_segment + radius),
        }
    }

    /// Get the effective horizontal radius of this shape.
    pub fn radius(&self) -> f32 {
        match self {
            Self::Capsule { radius, .. } => *radius,
            Self::Box { half_extents } => half_extents.x.max(half_extents.z),
        }
    }

    /// Get the height of this shape.
    pub fn height(&self) -> f32 {
        match self {
            Self::Capsule { height, .. } => *height,
            Self::Box { half_extents } => half_extents.y * 2.0,
        }
    }

    /// Half-size of the box that bounds this shape.
    pub fn half_extents(&self) -> Vec3 {
        match self {
            Self::Capsule { radius, height } => Vec3::new(*radius, height / 2.0, *radius),
            Self::Box { half_extents } => *half_extents,
        }
    }
}

impl Default for TraceShape {
    fn default() -> Self {
        Self::PLAYER
    }
}
