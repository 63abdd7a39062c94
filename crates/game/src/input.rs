//! Player input handling.
//!
//! This module converts raw key state into the per-tick [`InputFrame`] the
//! locomotion controller consumes.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strider_physics::InputFrame;

/// Raw player input for a single tick.
///
/// This is the input format received from the host input system.
/// It gets converted to an [`InputFrame`] by an [`InputSampler`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Movement keys held.
    pub movement: MovementInput,

    /// Mouse delta this tick (pixels).
    pub mouse_delta: (f32, f32),

    /// Action buttons held.
    pub actions: ActionInput,
}

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Action button states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActionInput {
    pub jump: bool,
    pub sprint: bool,
    pub interact: bool,
}

impl PlayerInput {
    /// Input holding only the given movement keys.
    pub fn moving(movement: MovementInput) -> Self {
        Self {
            movement,
            ..Default::default()
        }
    }

    /// Movement axes: `x` = right minus left, `y` = forward minus backward.
    ///
    /// Diagonals are normalized so no axis pair exceeds unit length.
    pub fn axes(&self) -> Vec2 {
        let mut axes = Vec2::ZERO;

        if self.movement.forward {
            axes.y += 1.0;
        }
        if self.movement.backward {
            axes.y -= 1.0;
        }
        if self.movement.right {
            axes.x += 1.0;
        }
        if self.movement.left {
            axes.x -= 1.0;
        }

        // Normalize diagonal movement
        if axes.length_squared() > 1.0 {
            axes = axes.normalize();
        }

        axes
    }

    /// Check if any movement input is active.
    pub fn has_movement(&self) -> bool {
        self.movement.forward || self.movement.backward || self.movement.left || self.movement.right
    }

    /// Check if any key or button at all is held.
    pub fn any_active(&self) -> bool {
        self.has_movement() || self.actions.jump || self.actions.sprint || self.actions.interact
    }
}

/// Turns held-key input into per-tick frames.
///
/// The jump button is reported as pressed only on the tick it goes down;
/// holding it does not re-trigger.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler {
    /// Jump state from the previous sample.
    prev_jump_held: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample one tick of input.
    pub fn sample(&mut self, input: &PlayerInput) -> InputFrame {
        let jump_held = input.actions.jump;
        let jump_pressed = jump_held && !self.prev_jump_held;
        self.prev_jump_held = jump_held;

        InputFrame {
            axes: input.axes(),
            jump_pressed,
            sprint_held: input.actions.sprint,
            any_active: input.any_active(),
        }
    }

    /// Forget the held jump so the next press counts.
    pub fn reset(&mut self) {
        self.prev_jump_held = false;
    }
}
