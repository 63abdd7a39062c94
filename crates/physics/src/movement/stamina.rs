//! Sprint stamina with an exhaustion latch.
//!
//! Stamina drains one unit per second of sprinting and regenerates one unit
//! per second otherwise. When it runs out the sprint is locked until the bar
//! has refilled to a third of its capacity, so a nearly empty bar can't be
//! tapped for a few frames of sprint at a time.

use serde::{Deserialize, Serialize};

/// Stamina resource.
///
/// Invariant: `0.0 <= current <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stamina {
    /// Remaining sprint time (seconds).
    current: f32,

    /// Capacity (seconds).
    max: f32,

    /// Set when the bar empties, cleared on recovery.
    exhausted: bool,
}

impl Stamina {
    /// Create a full stamina bar.
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: max,
            max,
            exhausted: false,
        }
    }

    /// Create a bar with a specific fill level, clamped into range.
    pub fn with_current(max: f32, current: f32) -> Self {
        let mut stamina = Self::new(max);
        stamina.current = current.clamp(0.0, stamina.max);
        stamina
    }

    /// Recover stamina for `delta_time` seconds.
    pub fn regen(&mut self, delta_time: f32) {
        let delta_time = sanitize(delta_time);
        self.current = (self.current + delta_time).min(self.max);

        if self.exhausted && self.current >= self.recovery_threshold() {
            self.exhausted = false;
            log::debug!("stamina recovered to {:.2}, sprint unlocked", self.current);
        }
    }

    /// Spend stamina for `delta_time` seconds of sprinting.
    ///
    /// The bar stops at zero rather than going negative.
    pub fn drain(&mut self, delta_time: f32) {
        let delta_time = sanitize(delta_time);
        self.current -= delta_time;

        if self.current <= 0.0 {
            self.current = 0.0;
            if !self.exhausted {
                log::debug!("stamina exhausted, sprint locked");
            }
            self.exhausted = true;
        }
    }

    /// Whether a sprint may be started or continued this tick.
    #[inline]
    pub fn can_sprint(&self) -> bool {
        self.current > 0.0 && !self.exhausted
    }

    /// Check if the exhaustion latch is set.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Remaining stamina.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Capacity.
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Level an exhausted bar must climb back to before sprint unlocks.
    #[inline]
    pub fn recovery_threshold(&self) -> f32 {
        self.max / 3.0
    }

    /// Fill level in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    /// Refill completely and clear the latch.
    pub fn refill(&mut self) {
        self.current = self.max;
        self.exhausted = false;
    }
}

fn sanitize(delta_time: f32) -> f32 {
    if delta_time.is_finite() {
        delta_time.max(0.0)
    } else {
        0.0
    }
}

// ============================================================================
// Tests
// ============================================================================
