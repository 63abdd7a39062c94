//! Strider Physics
//!
//! Locomotion for a rigid-body player character: a four-state movement
//! machine with sprint stamina, plus the collision queries a host needs to
//! answer its ground and obstruction checks.
//!
//! # Architecture
//!
//! - **Movement**: The state machine. It consumes an [`Environment`] and never
//!   touches physics directly.
//! - **Collision**: A box-brush collision world with overlap and sweep
//!   queries, usable as the physics side of an [`Environment`].

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{CollisionWorld, ContentFlags, TraceResult, TraceShape};
pub use movement::{
    CameraBasis, ConfigError, Environment, InputFrame, LocomotionConfig, LocomotionController,
    LocomotionState, Stamina, Transition,
};
