//! Player locomotion state machine.
//!
//! This module turns per-tick input into rigid-body velocity through four
//! states:
//!
//! - **Idle**: grounded rest, stamina regenerates
//! - **Running**: camera-relative ground movement, sprint drains stamina
//! - **Jumping**: one-tick launch impulse
//! - **Falling**: launch momentum plus limited air control, stops at walls
//!
//! # Design
//!
//! The [`LocomotionController`] owns the active [`LocomotionState`] and an
//! injected [`Environment`] that answers ground, sweep, camera and input
//! queries. States are plain data; their logic receives a [`TickContext`]
//! borrowing the controller's resources for the duration of one tick.

mod config;
mod controller;
mod direction;
mod environment;
mod stamina;
mod state;

#[cfg(test)]
mod fake;

pub use config::{ConfigError, LocomotionConfig};
pub use controller::{LocomotionController, Transition};
pub use direction::{resolve_move_direction, CameraBasis};
pub use environment::{Environment, InputFrame};
pub use stamina::Stamina;
pub use state::{LocomotionState, TickContext};
