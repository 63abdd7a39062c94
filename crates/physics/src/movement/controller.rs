//! Locomotion controller.
//!
//! This is the main entry point for player movement. It owns the active
//! [`LocomotionState`], the stamina bar and the environment handle, and
//! advances the state machine by one step per call to [`update`].
//!
//! [`update`]: LocomotionController::update

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::LocomotionConfig;
use super::environment::Environment;
use super::stamina::Stamina;
use super::state::{LocomotionState, TickContext};

/// A state change performed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: LocomotionState,
    pub to: LocomotionState,
}

/// Finite-state locomotion controller.
///
/// # Example
///
/// ```ignore
/// let mut controller = LocomotionController::new(LocomotionConfig::default(), env);
///
/// // Each simulation step:
/// if let Some(transition) = controller.update(delta_time) {
///     println!("{} -> {}", transition.from, transition.to);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LocomotionController<E> {
    /// Physics, camera and input handle.
    env: E,

    /// Tuning parameters.
    config: LocomotionConfig,

    /// The single active state.
    state: LocomotionState,

    /// Sprint stamina, starts full.
    stamina: Stamina,

    /// Velocity captured at the last jump launch.
    launch_velocity: Vec3,

    /// Number of updates run so far.
    ticks: u64,
}

impl<E: Environment> LocomotionController<E> {
    /// Create a controller in the Idle state with a full stamina bar.
    pub fn new(config: LocomotionConfig, env: E) -> Self {
        Self {
            env,
            stamina: Stamina::new(config.max_stamina),
            config,
            state: LocomotionState::Idle,
            launch_velocity: Vec3::ZERO,
            ticks: 0,
        }
    }

    /// Create a controller with default tuning.
    pub fn with_default_config(env: E) -> Self {
        Self::new(LocomotionConfig::default(), env)
    }

    /// Advance the state machine by one tick.
    ///
    /// Input is sampled once, the active state runs, and if it asked for a
    /// transition the new state's entry behavior runs immediately. At most one
    /// transition happens per tick.
    pub fn update(&mut self, delta_time: f32) -> Option<Transition> {
        let delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };

        let input = self.env.input();
        let current = self.state;

        let mut ctx = TickContext {
            env: &mut self.env,
            config: &self.config,
            stamina: &mut self.stamina,
            launch_velocity: &mut self.launch_velocity,
            input,
            delta_time,
        };

        let transition = current.update(&mut ctx).map(|next| {
            next.enter(&mut ctx);
            Transition { from: current, to: next }
        });

        if let Some(transition) = transition {
            log::debug!(
                "tick {}: {} -> {}",
                self.ticks,
                transition.from,
                transition.to
            );
            self.state = transition.to;
        }

        self.ticks += 1;
        transition
    }

    /// Switch state outside of a tick, running the new state's entry.
    pub fn switch_state(&mut self, next: LocomotionState) {
        let input = self.env.input();
        let mut ctx = TickContext {
            env: &mut self.env,
            config: &self.config,
            stamina: &mut self.stamina,
            launch_velocity: &mut self.launch_velocity,
            input,
            delta_time: 0.0,
        };
        next.enter(&mut ctx);

        log::debug!("forced switch: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Put the controller back into its initial condition.
    pub fn reset(&mut self) {
        self.state = LocomotionState::Idle;
        self.stamina.refill();
        self.launch_velocity = Vec3::ZERO;
    }
}

impl<E> LocomotionController<E> {
    /// Active state.
    #[inline]
    pub fn state(&self) -> LocomotionState {
        self.state
    }

    /// Sprint stamina.
    #[inline]
    pub fn stamina(&self) -> &Stamina {
        &self.stamina
    }

    /// Tuning parameters.
    #[inline]
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Velocity carried from the last jump into the fall.
    #[inline]
    pub fn launch_velocity(&self) -> Vec3 {
        self.launch_velocity
    }

    /// Number of updates run so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Environment handle.
    #[inline]
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Mutable environment handle, for the host to feed input and physics.
    #[inline]
    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Take the environment back.
    pub fn into_env(self) -> E {
        self.env
    }
}

// ============================================================================
// Tests
// ============================================================================
