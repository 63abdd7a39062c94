//! Player entity and the environment its controller runs against.

use std::sync::Arc;

use glam::Vec3;
use strider_physics::{
    CameraBasis, CollisionWorld, ContentFlags, Environment, InputFrame, LocomotionConfig,
    LocomotionController, LocomotionState, Stamina, TraceShape, Transition,
};

use crate::body::RigidBody;
use crate::camera::FollowCamera;
use crate::input::{InputSampler, PlayerInput};

/// Unique identifier for entities.
pub type EntityId = u32;

/// Starting and maximum health.
pub const DEFAULT_HEALTH: i32 = 100;

/// Body, camera and world wired together for one player.
#[derive(Debug, Clone)]
pub struct PlayerEnvironment {
    /// Static level geometry.
    pub world: Arc<CollisionWorld>,

    /// Simulated body.
    pub body: RigidBody,

    /// Mouse-look camera.
    pub camera: FollowCamera,

    /// Input for the current tick.
    pub input: InputFrame,

    /// Radius of the obstruction probe capsule.
    pub probe_radius: f32,
}

impl PlayerEnvironment {
    pub fn new(
        world: Arc<CollisionWorld>,
        body: RigidBody,
        camera: FollowCamera,
        probe_radius: f32,
    ) -> Self {
        Self {
            world,
            body,
            camera,
            input: InputFrame::NONE,
            probe_radius,
        }
    }

    /// Capsule spanning the body's height, inflated to the probe radius.
    fn probe_shape(&self) -> TraceShape {
        TraceShape::capsule_between_caps(self.body.half_extents().y, self.probe_radius)
    }
}

impl Environment for PlayerEnvironment {
    fn is_grounded(&self) -> bool {
        self.body.is_grounded(&self.world)
    }

    fn sweep_capsule(&self, direction: Vec3, max_distance: f32) -> bool {
        self.world
            .cast(
                self.body.position,
                direction,
                max_distance,
                self.probe_shape(),
                ContentFlags::MASK_OBSTRUCTION,
            )
            .hit_something()
    }

    fn camera_basis(&self) -> CameraBasis {
        self.camera.basis()
    }

    fn input(&self) -> InputFrame {
        self.input
    }

    fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.body.velocity = velocity;
    }

    fn set_facing_yaw(&mut self, yaw: f32) {
        self.body.facing_yaw = yaw;
    }
}

/// A player in the game.
#[derive(Debug, Clone)]
pub struct Player {
    /// Unique player ID.
    pub id: EntityId,

    /// Player name/handle.
    pub name: String,

    /// Locomotion state machine driving the body.
    pub controller: LocomotionController<PlayerEnvironment>,

    /// Current health. Carried for the host; movement never reads it.
    pub health: i32,

    /// Maximum health.
    pub max_health: i32,

    /// Jump edge detection.
    sampler: InputSampler,

    /// Names of the zones the player was in after the last tick.
    zones: Vec<String>,
}

impl Player {
    /// Create a new player standing at the given spawn position.
    pub fn new(
        id: EntityId,
        name: String,
        world: Arc<CollisionWorld>,
        spawn_position: Vec3,
        facing: f32,
        config: LocomotionConfig,
    ) -> Self {
        let mut body = RigidBody::standing_at(spawn_position, TraceShape::PLAYER);
        body.facing_yaw = facing;

        let camera = FollowCamera::new(facing);
        let env = PlayerEnvironment::new(world, body, camera, config.probe_radius);

        Self {
            id,
            name,
            controller: LocomotionController::new(config, env),
            health: DEFAULT_HEALTH,
            max_health: DEFAULT_HEALTH,
            sampler: InputSampler::new(),
            zones: Vec::new(),
        }
    }

    /// Run one tick: look, sample input, step the state machine, move the body.
    pub fn tick(
        &mut self,
        input: &PlayerInput,
        mouse_sensitivity: f32,
        gravity: f32,
        delta_time: f32,
    ) -> Option<Transition> {
        let env = self.controller.env_mut();
        env.camera.apply_mouse(input.mouse_delta, mouse_sensitivity);
        env.input = self.sampler.sample(input);

        let transition = self.controller.update(delta_time);

        let env = self.controller.env_mut();
        env.body.integrate(&env.world, gravity, delta_time);

        transition
    }

    /// Replace the remembered zone set, returning the newly entered ones.
    pub(crate) fn update_zones(&mut self, current: Vec<String>) -> Vec<String> {
        let entered = current
            .iter()
            .filter(|name| !self.zones.contains(name))
            .cloned()
            .collect();
        self.zones = current;
        entered
    }

    /// Get the player's current position (body center).
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.body().position
    }

    /// Get the player's velocity.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.body().velocity
    }

    /// Simulated body.
    #[inline]
    pub fn body(&self) -> &RigidBody {
        &self.controller.env().body
    }

    /// Active locomotion state.
    #[inline]
    pub fn state(&self) -> LocomotionState {
        self.controller.state()
    }

    /// Sprint stamina.
    #[inline]
    pub fn stamina(&self) -> &Stamina {
        self.controller.stamina()
    }

    /// Check if the player is on the ground.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.controller.env().is_grounded()
    }

    /// Zones the player was in after the last tick.
    #[inline]
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// Move the player back to a spawn point with fresh locomotion state.
    pub fn respawn(&mut self, position: Vec3, facing: f32) {
        self.health = self.max_health;
        self.sampler.reset();
        self.zones.clear();

        let env = self.controller.env_mut();
        env.body = RigidBody::standing_at(position, env.body.shape);
        env.body.facing_yaw = facing;
        env.camera = FollowCamera::new(facing);
        env.input = InputFrame::NONE;

        self.controller.reset();
    }
}
