//! Scripted environment for exercising the state machine in tests.

use std::cell::Cell;

use glam::Vec3;

use super::direction::CameraBasis;
use super::environment::{Environment, InputFrame};

/// Environment whose every answer is a public field.
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    pub grounded: bool,
    pub obstructed: bool,
    pub camera: CameraBasis,
    pub input: InputFrame,
    pub velocity: Vec3,
    pub facing_yaw: f32,

    /// Number of capsule sweeps performed.
    pub sweeps: Cell<u32>,
    /// Direction and distance of the most recent sweep.
    pub last_sweep: Cell<Option<(Vec3, f32)>>,
}

impl FakeEnvironment {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            ..Default::default()
        }
    }
}

impl Environment for FakeEnvironment {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn sweep_capsule(&self, direction: Vec3, max_distance: f32) -> bool {
        self.sweeps.set(self.sweeps.get() + 1);
        self.last_sweep.set(Some((direction, max_distance)));
        self.obstructed
    }

    fn camera_basis(&self) -> CameraBasis {
        self.camera
    }

    fn input(&self) -> InputFrame {
        self.input
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn set_facing_yaw(&mut self, yaw: f32) {
        self.facing_yaw = yaw;
    }
}
