//! Content flags for collision filtering.

use serde::{Deserialize, Serialize};

/// Content flags describe what type of volume a brush is.
///
/// Queries take a mask and only consider brushes whose contents intersect
/// it, so e.g. the ground probe can ignore zone volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentFlags(pub u32);

impl ContentFlags {
    /// Empty space - nothing here.
    pub const EMPTY: Self = Self(0);

    /// Solid world geometry - walls, floors, ledges.
    pub const SOLID: Self = Self(1 << 0);

    /// Zone volume - gameplay region, never stood on or blocked by.
    pub const ZONE: Self = Self(1 << 1);

    /// Every content type.
    pub const ALL: Self = Self(u32::MAX);

    /// What a body can stand on: everything except zones.
    pub const MASK_GROUND: Self = Self(Self::ALL.0 & !Self::ZONE.0);

    /// What stops a body moving sideways.
    pub const MASK_OBSTRUCTION: Self = Self::SOLID;

    /// Check if any of the given flags are set.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }
}
