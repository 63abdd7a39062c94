//! Collision queries for the reference player environment.
//!
//! A small world of box brushes backed by parry3d. It answers the two
//! questions the locomotion controller asks each tick (am I standing on
//! something, is something in the way) and resolves body motion.
//!
//! # Key Types
//!
//! - [`CollisionWorld`]: The collision environment containing all geometry
//! - [`TraceResult`]: Output from a sweep
//! - [`TraceShape`]: Shape used for queries (capsule or box)
//!
//! # Sweeps
//!
//! Sweeps move a shape through the world and return:
//! - How far the shape traveled (fraction 0.0-1.0)
//! - The final position
//! - Surface normal at impact (if any)
//! - Content flags of what was hit

mod flags;
mod trace;
mod world;

pub use flags::ContentFlags;
pub use trace::{TraceResult, TraceShape};
pub use world::{CollisionBrush, CollisionWorld};
