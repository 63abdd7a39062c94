//! Strider Sandbox
//!
//! This crate hosts the locomotion controller in a small simulated world:
//!
//! - Player input sampling and mouse-look
//! - Rigid bodies integrated against the collision world
//! - Levels with spawn points and named zones
//! - A fixed-step simulation with serializable snapshots
//!
//! # Architecture
//!
//! Each player owns a [`LocomotionController`] whose environment is the
//! player's body, camera and a shared handle to the level geometry. A tick
//! samples input, lets the controller pick velocities, then integrates the
//! body.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Simulation                           │
//! │  ┌─────────┐    ┌──────────────┐    ┌─────────────────────┐  │
//! │  │ Player  │───►│ Locomotion   │───►│ RigidBody           │  │
//! │  │ Input   │    │ Controller   │    │ (gravity, collision)│  │
//! │  └─────────┘    └──────────────┘    └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`LocomotionController`]: strider_physics::LocomotionController

pub mod body;
pub mod camera;
pub mod input;
pub mod level;
pub mod player;
pub mod simulation;

// Re-export main types
pub use body::RigidBody;
pub use camera::FollowCamera;
pub use input::{InputSampler, PlayerInput};
pub use level::{Level, Zone};
pub use player::{Player, PlayerEnvironment};
pub use simulation::{LoadError, Simulation, SimulationConfig, Snapshot, TickEvent};

// Re-export physics types for convenience
pub use strider_physics::{
    CollisionWorld, ContentFlags, LocomotionConfig, LocomotionController, LocomotionState,
    Transition,
};
