//! Locomotion states and their per-tick logic.
//!
//! States carry no data of their own. Each tick the controller builds a
//! [`TickContext`] borrowing everything a state may touch and hands it to
//! [`LocomotionState::update`], which applies the state's velocity policy and
//! returns the next state, if any.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::LocomotionConfig;
use super::direction::resolve_move_direction;
use super::environment::{Environment, InputFrame};
use super::stamina::Stamina;

/// The four movement states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocomotionState {
    /// Standing still on the ground.
    #[default]
    Idle,
    /// Moving on the ground, walking or sprinting.
    Running,
    /// Launch impulse; lasts exactly one evaluation.
    Jumping,
    /// Airborne, with limited air control.
    Falling,
}

/// Everything a state may read or write during one tick.
pub struct TickContext<'a, E: ?Sized> {
    /// Physics, camera and input handle.
    pub env: &'a mut E,

    /// Tuning parameters.
    pub config: &'a LocomotionConfig,

    /// Sprint stamina.
    pub stamina: &'a mut Stamina,

    /// Velocity captured at jump launch, carried through the fall.
    pub launch_velocity: &'a mut Vec3,

    /// Input sampled at the start of the tick.
    pub input: InputFrame,

    /// Tick length in seconds.
    pub delta_time: f32,
}

impl LocomotionState {
    /// All states, in declaration order.
    pub const ALL: [Self; 4] = [Self::Idle, Self::Running, Self::Jumping, Self::Falling];

    /// Short lowercase name for logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Jumping => "jumping",
            Self::Falling => "falling",
        }
    }

    /// Check if this state belongs to the airborne phase.
    #[inline]
    pub fn is_airborne(self) -> bool {
        matches!(self, Self::Jumping | Self::Falling)
    }

    /// Entry behavior, run once when the controller switches into this state.
    pub fn enter<E: Environment + ?Sized>(self, ctx: &mut TickContext<'_, E>) {
        if self == Self::Jumping {
            launch(ctx);
        }
    }

    /// Run one tick of this state.
    ///
    /// Returns the state to switch to, or `None` to stay.
    pub fn update<E: Environment + ?Sized>(
        self,
        ctx: &mut TickContext<'_, E>,
    ) -> Option<LocomotionState> {
        match self {
            Self::Idle => idle(ctx),
            Self::Running => running(ctx),
            Self::Jumping => Some(Self::Falling),
            Self::Falling => falling(ctx),
        }
    }
}

impl fmt::Display for LocomotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Per-state logic
// ============================================================================

fn idle<E: Environment + ?Sized>(ctx: &mut TickContext<'_, E>) -> Option<LocomotionState> {
    if !ctx.env.is_grounded() {
        return Some(LocomotionState::Falling);
    }

    ctx.stamina.regen(ctx.delta_time);

    let next = if ctx.input.has_movement() {
        Some(LocomotionState::Running)
    } else if ctx.input.jump_pressed {
        Some(LocomotionState::Jumping)
    } else {
        None
    };

    // Grounded rest pins the body, vertical included
    ctx.env.set_velocity(Vec3::ZERO);

    next
}

fn running<E: Environment + ?Sized>(ctx: &mut TickContext<'_, E>) -> Option<LocomotionState> {
    // Transitions are decided first, but this tick's movement still applies
    let next = if !ctx.env.is_grounded() {
        Some(LocomotionState::Falling)
    } else if !ctx.input.any_active {
        Some(LocomotionState::Idle)
    } else if ctx.input.jump_pressed {
        Some(LocomotionState::Jumping)
    } else {
        None
    };

    let camera = ctx.env.camera_basis();
    let direction = resolve_move_direction(ctx.input.axes, &camera);

    let speed = if ctx.input.sprint_held && ctx.stamina.can_sprint() {
        ctx.stamina.drain(ctx.delta_time);
        ctx.config.run_speed
    } else {
        ctx.stamina.regen(ctx.delta_time);
        ctx.config.move_speed
    };

    let movement = direction * speed;
    let current = ctx.env.velocity();
    let velocity = Vec3::new(movement.x, current.y, movement.z);
    ctx.env.set_velocity(velocity);
    ctx.env.set_facing_yaw(camera.yaw);

    log::trace!("running: velocity={velocity:?} stamina={:.2}", ctx.stamina.current());

    next
}

fn launch<E: Environment + ?Sized>(ctx: &mut TickContext<'_, E>) {
    let current = ctx.env.velocity();
    let launched = Vec3::new(current.x, ctx.config.jump_force, current.z);
    ctx.env.set_velocity(launched);
    *ctx.launch_velocity = launched;
}

fn falling<E: Environment + ?Sized>(ctx: &mut TickContext<'_, E>) -> Option<LocomotionState> {
    if ctx.env.is_grounded() {
        return Some(LocomotionState::Idle);
    }

    let camera = ctx.env.camera_basis();
    let direction = resolve_move_direction(ctx.input.axes, &camera);

    let limit = ctx.config.max_velocity_change;
    let steer = direction * ctx.config.move_speed;
    let steer = Vec3::new(clamp_abs(steer.x, limit), 0.0, clamp_abs(steer.z, limit));
    let carried = *ctx.launch_velocity + steer;

    let current = ctx.env.velocity();
    ctx.env.set_velocity(Vec3::new(carried.x, current.y, carried.z));

    // Wall-stop: kill horizontal motion and the carried momentum
    if direction != Vec3::ZERO && ctx.env.sweep_capsule(direction, ctx.config.probe_distance) {
        let current = ctx.env.velocity();
        ctx.env.set_velocity(Vec3::new(0.0, current.y, 0.0));
        *ctx.launch_velocity = Vec3::ZERO;
        log::debug!("falling: obstruction ahead, horizontal motion stopped");
    }

    None
}

/// Clamp to `[-limit, limit]` without panicking on a negative limit.
#[inline]
fn clamp_abs(value: f32, limit: f32) -> f32 {
    value.min(limit).max(-limit)
}

// ============================================================================
// Tests
// ============================================================================
