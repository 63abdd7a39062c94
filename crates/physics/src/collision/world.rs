//! Collision world containing all static geometry.
//!
//! The world is a flat list of box brushes. Queries test a shape against every
//! brush whose contents match the query mask, which is plenty for arenas of a
//! few dozen brushes.

use glam::Vec3;
use parry3d::math::{Isometry, Real};
use parry3d::query::contact;
use parry3d::shape::{Shape, SharedShape};

use super::flags::ContentFlags;
use super::trace::{TraceResult, TraceShape};

/// Bisection steps once a blocked march step is found.
const SWEEP_ITERATIONS: u32 = 12;

/// Smallest march step along a trace (meters).
const MIN_MARCH_STEP: f32 = 0.05;

/// Upper bound on march steps for very long traces.
const MAX_MARCH_STEPS: u32 = 1024;

/// A piece of collision geometry in the world.
#[derive(Debug, Clone)]
pub struct CollisionBrush {
    /// Unique identifier for this brush.
    pub id: u32,
    /// The collision shape.
    pub shape: SharedShape,
    /// Position in world space.
    pub transform: Isometry<Real>,
    /// Content flags (solid, zone, ...).
    pub contents: ContentFlags,
}

/// The collision world containing all geometry.
///
/// # Thread Safety
///
/// The collision world is immutable after construction and can be shared
/// between players behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    /// Static world brushes (walls, floors, zones).
    brushes: Vec<CollisionBrush>,
    /// Next brush ID to assign.
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            brushes: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an axis-aligned box to the world.
    ///
    /// # Arguments
    ///
    /// * `center` - Center position of the box in world space
    /// * `half_extents` - Half-size in each axis (x, y, z)
    /// * `contents` - Content flags for collision filtering
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3, contents: ContentFlags) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        self.brushes.push(CollisionBrush {
            id,
            shape: SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z),
            transform: translation(center),
            contents,
        });

        id
    }

    /// Remove all collision geometry.
    pub fn clear(&mut self) {
        self.brushes.clear();
    }

    /// Get the number of collision brushes.
    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    /// Check if a box overlaps any matching brush.
    ///
    /// Used as the ground-contact probe: a thin box under the body's feet.
    pub fn overlap_box(&self, center: Vec3, half_extents: Vec3, mask: ContentFlags) -> bool {
        let shape = TraceShape::Box { half_extents };
        self.point_in_solid(center, shape, mask)
    }

    /// Check if a shape placed at `position` overlaps any matching brush.
    pub fn point_in_solid(&self, position: Vec3, shape: TraceShape, mask: ContentFlags) -> bool {
        self.first_overlap(position, shape, mask, &[]).is_some()
    }

    /// Sweep a shape from `start` along `direction` for up to `distance`.
    ///
    /// `direction` is normalized here; a zero direction never hits.
    pub fn sweep(
        &self,
        start: Vec3,
        direction: Vec3,
        distance: f32,
        shape: TraceShape,
        mask: ContentFlags,
    ) -> TraceResult {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO || distance <= 0.0 {
            return TraceResult::no_hit(start);
        }

        self.trace(start, start + direction * distance, shape, mask)
    }

    /// Cast a shape from `start` along `direction` for up to `distance`.
    ///
    /// Unlike [`sweep`](Self::sweep), brushes the shape already overlaps at
    /// `start` are ignored: only geometry the shape runs into counts.
    pub fn cast(
        &self,
        start: Vec3,
        direction: Vec3,
        distance: f32,
        shape: TraceShape,
        mask: ContentFlags,
    ) -> TraceResult {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO || distance <= 0.0 {
            return TraceResult::no_hit(start);
        }

        let test_shape = parry_shape(shape);
        let test_transform = translation(start);
        let ignored: Vec<u32> = self
            .brushes
            .iter()
            .filter(|brush| {
                mask.intersects(brush.contents)
                    && overlaps(&test_transform, test_shape.as_ref(), brush)
            })
            .map(|brush| brush.id)
            .collect();

        self.trace_excluding(start, start + direction * distance, shape, mask, &ignored)
    }

    /// Trace a shape from `start` to `end`.
    ///
    /// Finds the furthest free position along the segment.
    pub fn trace(
        &self,
        start: Vec3,
        end: Vec3,
        shape: TraceShape,
        mask: ContentFlags,
    ) -> TraceResult {
        self.trace_excluding(start, end, shape, mask, &[])
    }

    // ========================================================================
    // Private helpers
    // ========================================================================

    fn trace_excluding(
        &self,
        start: Vec3,
        end: Vec3,
        shape: TraceShape,
        mask: ContentFlags,
        exclude: &[u32],
    ) -> TraceResult {
        let delta = end - start;
        let blocked = |position: Vec3| self.first_overlap(position, shape, mask, exclude).is_some();

        // No movement - just check if position is valid
        if delta.length_squared() < 1e-8 {
            return match self.first_overlap(start, shape, mask, exclude) {
                Some(brush) => TraceResult {
                    fraction: 0.0,
                    end_position: start,
                    hit_normal: Some(Vec3::Y),
                    hit_contents: brush.contents,
                    started_in_solid: true,
                },
                None => TraceResult::no_hit(start),
            };
        }

        let started_in_solid = blocked(start);

        let mut lo = 0.0_f32;
        let mut hi = 0.0_f32;

        if !started_in_solid {
            // March in steps no longer than the shape is thin so a thin wall
            // between start and end can't be skipped, then bisect the step
            // that first touches geometry.
            let step = shape.radius().min(shape.height() * 0.5).max(MIN_MARCH_STEP);
            let steps = ((delta.length() / step).ceil() as u32).clamp(1, MAX_MARCH_STEPS);

            let mut first_blocked = None;
            for i in 1..=steps {
                let t = i as f32 / steps as f32;
                if blocked(start + delta * t) {
                    first_blocked = Some(t);
                    break;
                }
                lo = t;
            }

            match first_blocked {
                Some(t) => hi = t,
                None => return TraceResult::no_hit(end),
            }

            for _ in 0..SWEEP_ITERATIONS {
                let mid = (lo + hi) * 0.5;
                if blocked(start + delta * mid) {
                    hi = mid;
                } else {
                    lo = mid;
                }
            }
        }

        let blocked_at = start + delta * hi;
        let overlap = self.first_overlap(blocked_at, shape, mask, exclude);
        let (hit_contents, hit_normal) = match overlap {
            Some(brush) => (
                brush.contents,
                self.contact_normal(blocked_at, shape, brush)
                    .unwrap_or_else(|| fallback_normal(delta)),
            ),
            None => (ContentFlags::SOLID, fallback_normal(delta)),
        };

        TraceResult {
            fraction: lo,
            end_position: start + delta * lo,
            hit_normal: Some(hit_normal),
            hit_contents,
            started_in_solid,
        }
    }

    fn first_overlap(
        &self,
        position: Vec3,
        shape: TraceShape,
        mask: ContentFlags,
        exclude: &[u32],
    ) -> Option<&CollisionBrush> {
        let test_shape = parry_shape(shape);
        let test_transform = translation(position);

        self.brushes.iter().find(|brush| {
            mask.intersects(brush.contents)
                && !exclude.contains(&brush.id)
                && overlaps(&test_transform, test_shape.as_ref(), brush)
        })
    }

    /// Direction that pushes the shape out of `brush`.
    fn contact_normal(
        &self,
        position: Vec3,
        shape: TraceShape,
        brush: &CollisionBrush,
    ) -> Option<Vec3> {
        let test_shape = parry_shape(shape);
        let test_transform = translation(position);

        match contact(
            &test_transform,
            test_shape.as_ref(),
            &brush.transform,
            brush.shape.as_ref(),
            0.0,
        ) {
            // normal1 points from the test shape toward the brush
            Ok(Some(hit)) => Some(-Vec3::new(hit.normal1.x, hit.normal1.y, hit.normal1.z)),
            _ => None,
        }
    }
}

/// Touching or penetrating counts as overlap.
fn overlaps(transform: &Isometry<Real>, shape: &dyn Shape, brush: &CollisionBrush) -> bool {
    matches!(
        contact(transform, shape, &brush.transform, brush.shape.as_ref(), 0.0),
        Ok(Some(_))
    )
}

/// Create a parry3d shape from a [`TraceShape`].
fn parry_shape(shape: TraceShape) -> SharedShape {
    match shape {
        TraceShape::Capsule { radius, height } => {
            // Parry capsule is defined by half-height of the cylinder part
            let cylinder_half_height = (height - 2.0 * radius).max(0.0) / 2.0;
            SharedShape::capsule_y(cylinder_half_height, radius)
        }
        TraceShape::Box { half_extents } => {
            SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }
    }
}

fn translation(position: Vec3) -> Isometry<Real> {
    Isometry::translation(position.x, position.y, position.z)
}

/// Opposite of the motion, used when parry reports no contact normal.
fn fallback_normal(delta: Vec3) -> Vec3 {
    let normal = (-delta).normalize_or_zero();
    if normal == Vec3::ZERO {
        Vec3::Y
    } else {
        normal
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_world() -> CollisionWorld {
        let mut world = CollisionWorld::new();

        // Floor, top surface at y=0
        world.add_box(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(50.0, 0.5, 50.0),
            ContentFlags::SOLID,
        );

        // Wall, near face at x=9.5
        world.add_box(
            Vec3::new(10.0, 2.5, 0.0),
            Vec3::new(0.5, 2.5, 10.0),
            ContentFlags::SOLID,
        );

        world
    }

    #[test]
    fn test_overlap_box_ground_probe() {
        let world = create_test_world();
        let half = Vec3::new(0.25, 0.01, 0.25);

        // Probe straddling the floor surface
        assert!(world.overlap_box(Vec3::new(0.0, 0.0, 0.0), half, ContentFlags::MASK_GROUND));

        // Probe a little above the floor
        assert!(!world.overlap_box(Vec3::new(0.0, 0.5, 0.0), half, ContentFlags::MASK_GROUND));
    }

    #[test]
    fn test_zone_is_ignored_by_ground_mask() {
        let mut world = CollisionWorld::new();
        world.add_box(Vec3::ZERO, Vec3::splat(2.0), ContentFlags::ZONE);
        let half = Vec3::new(0.25, 0.01, 0.25);

        assert!(!world.overlap_box(Vec3::ZERO, half, ContentFlags::MASK_GROUND));
        assert!(world.overlap_box(Vec3::ZERO, half, ContentFlags::ZONE));
    }

    #[test]
    fn test_sweep_capsule_hits_wall() {
        let world = create_test_world();
        let shape = TraceShape::PLAYER;

        let result = world.sweep(
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::X,
            15.0,
            shape,
            ContentFlags::MASK_OBSTRUCTION,
        );

        assert!(result.hit_something());
        // Capsule radius 0.5 stops it around x=9.0
        assert!((result.end_position.x - 9.0).abs() < 0.05);
        let normal = result.hit_normal.unwrap();
        assert!(normal.x < -0.9, "normal should face back toward the capsule: {normal:?}");
    }

    #[test]
    fn test_sweep_misses_when_short() {
        let world = create_test_world();

        let result = world.sweep(
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::X,
            0.5,
            TraceShape::PLAYER,
            ContentFlags::MASK_OBSTRUCTION,
        );
        assert!(!result.hit_something());
        assert_eq!(result.end_position, Vec3::new(0.5, 1.5, 0.0));
    }

    #[test]
    fn test_sweep_zero_direction_never_hits() {
        let world = create_test_world();
        let result = world.sweep(
            Vec3::new(9.0, 1.5, 0.0),
            Vec3::ZERO,
            1.0,
            TraceShape::PLAYER,
            ContentFlags::MASK_OBSTRUCTION,
        );
        assert!(!result.hit_something());
    }

    #[test]
    fn test_cast_ignores_initial_overlap() {
        let world = create_test_world();
        // Radius-1 probe around a standing body digs into the floor
        let probe = TraceShape::capsule_between_caps(1.0, 1.0);
        let start = Vec3::new(8.2, 1.0, 0.0);

        let swept = world.sweep(start, Vec3::X, 0.5, probe, ContentFlags::MASK_OBSTRUCTION);
        assert!(swept.started_in_solid);

        // Floor is ignored; the probe reaches 9.2 and the wall face is at 9.5
        let cast = world.cast(start, Vec3::X, 0.5, probe, ContentFlags::MASK_OBSTRUCTION);
        assert!(!cast.started_in_solid);
        assert!(cast.hit_something());
        assert_eq!(cast.hit_contents, ContentFlags::SOLID);

        let away = world.cast(start, Vec3::NEG_X, 0.5, probe, ContentFlags::MASK_OBSTRUCTION);
        assert!(!away.hit_something());
    }

    #[test]
    fn test_capsule_overlaps_wide_floor() {
        // 100m floor, much larger than the capsule
        let world = create_test_world();
        let shape = TraceShape::PLAYER;

        for y in [0.0, 0.5, 0.9] {
            assert!(
                world.point_in_solid(Vec3::new(0.0, y, 0.0), shape, ContentFlags::MASK_GROUND),
                "capsule centered at y={y} should sink into the floor"
            );
        }
        assert!(!world.point_in_solid(Vec3::new(0.0, 1.01, 0.0), shape, ContentFlags::MASK_GROUND));
    }

    #[test]
    fn test_trace_lands_on_floor() {
        let world = create_test_world();

        // Capsule center at 1.5 means its bottom is 0.5 above the floor
        let result = world.trace(
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
            TraceShape::PLAYER,
            ContentFlags::MASK_GROUND,
        );

        assert!(result.hit_something());
        assert!((result.end_position.y - 1.0).abs() < 0.01);
        assert!(result.hit_normal.unwrap().y > 0.9);
    }

    #[test]
    fn test_started_in_solid() {
        let world = create_test_world();
        let result = world.trace(
            Vec3::new(10.0, 1.0, 0.0),
            Vec3::new(12.0, 1.0, 0.0),
            TraceShape::PLAYER,
            ContentFlags::SOLID,
        );
        assert!(result.started_in_solid);
        assert_eq!(result.fraction, 0.0);
    }

    #[test]
    fn test_content_mask_filtering() {
        let mut world = CollisionWorld::new();

        world.add_box(Vec3::new(5.0, 1.0, 0.0), Vec3::new(0.5, 1.0, 5.0), ContentFlags::SOLID);
        world.add_box(Vec3::new(3.0, 1.0, 0.0), Vec3::new(0.5, 1.0, 5.0), ContentFlags::ZONE);

        let result = world.sweep(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::X,
            10.0,
            TraceShape::Box {
                half_extents: Vec3::splat(0.1),
            },
            ContentFlags::MASK_OBSTRUCTION,
        );

        assert!(result.hit_something());
        // Should stop at the wall face (4.5), not the zone (2.5)
        assert!((result.end_position.x - 4.4).abs() < 0.05);
        assert_eq!(result.hit_contents, ContentFlags::SOLID);
    }

    #[test]
    fn test_clear() {
        let mut world = create_test_world();
        assert_eq!(world.brush_count(), 2);
        world.clear();
        assert_eq!(world.brush_count(), 0);
        let inside_floor = Vec3::new(0.0, -0.5, 0.0);
        assert!(!world.point_in_solid(inside_floor, TraceShape::PLAYER, ContentFlags::ALL));
    }
}
