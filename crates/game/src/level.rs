//! Level geometry, spawn points and zones.

use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strider_physics::{CollisionWorld, ContentFlags};

/// A level containing collision geometry, spawn points and zones.
#[derive(Debug, Clone)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Collision world, shared with every player's environment.
    collision: Arc<CollisionWorld>,

    /// Player spawn points.
    pub spawn_points: Vec<SpawnPoint>,

    /// Named gameplay regions.
    pub zones: Vec<Zone>,
}

/// A spawn point for players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Feet position in world space.
    pub position: Vec3,

    /// Initial facing direction (yaw in radians).
    pub facing: f32,
}

/// A named box region. Zones never block movement or count as ground.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier for events.
    pub name: String,

    /// Center position.
    pub center: Vec3,

    /// Half-extents of the zone box.
    pub half_extents: Vec3,
}

impl Zone {
    /// Check if a point lies inside the zone.
    pub fn contains(&self, point: Vec3) -> bool {
        let min = self.center - self.half_extents;
        let max = self.center + self.half_extents;

        point.cmpge(min).all() && point.cmple(max).all()
    }
}

impl Level {
    /// Create an empty level.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            collision: Arc::new(CollisionWorld::new()),
            spawn_points: Vec::new(),
            zones: Vec::new(),
        }
    }

    /// Create a simple test level for development.
    ///
    /// A large floor with a tall wall 6 units in front of the first spawn,
    /// a waist-high ledge to the west and a long open track to the east.
    pub fn test_arena() -> Self {
        let mut level = Self::new("test_arena", "Test Arena");

        // Floor, top surface at y=0
        level.add_solid(Vec3::new(0.0, -0.5, 0.0), Vec3::new(100.0, 0.5, 100.0));

        // Wall, near face at z=6
        level.add_solid(Vec3::new(0.0, 4.0, 6.5), Vec3::new(10.0, 4.0, 0.5));

        // Ledge, top at y=1
        level.add_solid(Vec3::new(-10.0, 0.5, 0.0), Vec3::new(2.0, 0.5, 2.0));

        level.add_zone("spawn_pad", Vec3::new(0.0, 1.5, 0.0), Vec3::new(2.0, 1.5, 2.0));
        level.add_zone("track", Vec3::new(30.0, 1.5, -20.0), Vec3::new(10.0, 1.5, 3.0));

        // Facing the wall
        level.spawn_points.push(SpawnPoint {
            position: Vec3::ZERO,
            facing: 0.0,
        });
        // Start of the track, facing +X
        level.spawn_points.push(SpawnPoint {
            position: Vec3::new(0.0, 0.0, -20.0),
            facing: std::f32::consts::FRAC_PI_2,
        });
        // On top of the ledge, facing its +Z edge
        level.spawn_points.push(SpawnPoint {
            position: Vec3::new(-10.0, 1.0, 0.0),
            facing: 0.0,
        });

        level
    }

    /// Shared handle to the collision world.
    #[inline]
    pub fn collision(&self) -> &Arc<CollisionWorld> {
        &self.collision
    }

    /// Add a solid box.
    pub fn add_solid(&mut self, center: Vec3, half_extents: Vec3) -> u32 {
        Arc::make_mut(&mut self.collision).add_box(center, half_extents, ContentFlags::SOLID)
    }

    /// Add a named zone.
    pub fn add_zone(&mut self, name: &str, center: Vec3, half_extents: Vec3) {
        Arc::make_mut(&mut self.collision).add_box(center, half_extents, ContentFlags::ZONE);
        self.zones.push(Zone {
            name: name.to_string(),
            center,
            half_extents,
        });
    }

    /// Get a player spawn point.
    pub fn spawn(&self, index: usize) -> Option<&SpawnPoint> {
        self.spawn_points.get(index)
    }

    /// Zones containing the given point.
    pub fn zones_at(&self, position: Vec3) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter().filter(move |zone| zone.contains(position))
    }
}
