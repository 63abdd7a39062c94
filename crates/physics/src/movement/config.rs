//! Locomotion tuning parameters.
//!
//! All values use metric units (meters, seconds). Stamina is measured in
//! seconds of sprinting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A locomotion parameter that failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("`max_stamina` must be greater than zero, got {0}")]
    NoStamina(f32),
}

/// Configuration for the locomotion controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    // ========================================================================
    // Speeds
    // ========================================================================
    /// Ground speed without sprint, also the air-control scale (m/s).
    pub move_speed: f32,

    /// Sprint speed (m/s).
    pub run_speed: f32,

    /// Vertical launch velocity applied on jump (m/s).
    pub jump_force: f32,

    /// Per-axis clamp on air-control input while falling (m/s).
    pub max_velocity_change: f32,

    // ========================================================================
    // Stamina
    // ========================================================================
    /// Seconds of sprint available from a full bar.
    pub max_stamina: f32,

    // ========================================================================
    // Obstruction probe
    // ========================================================================
    /// How far ahead the airborne capsule sweep looks (meters).
    pub probe_distance: f32,

    /// Radius of the airborne capsule sweep (meters).
    pub probe_radius: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            run_speed: 12.0,
            jump_force: 8.0,
            max_velocity_change: 2.0,
            max_stamina: 5.0,
            probe_distance: 0.5,
            probe_radius: 1.0,
        }
    }
}

impl LocomotionConfig {
    /// Snappier movement with a longer sprint and more air control.
    pub fn arcade() -> Self {
        Self {
            move_speed: 7.0,
            run_speed: 15.0,
            jump_force: 10.0,
            max_velocity_change: 4.0,
            max_stamina: 8.0,
            ..Default::default()
        }
    }

    /// Slow, committed movement with a short sprint.
    pub fn heavy() -> Self {
        Self {
            move_speed: 3.5,
            run_speed: 7.0,
            jump_force: 5.0,
            max_velocity_change: 1.0,
            max_stamina: 3.0,
            ..Default::default()
        }
    }

    /// Check every parameter is usable by the controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("move_speed", self.move_speed),
            ("run_speed", self.run_speed),
            ("jump_force", self.jump_force),
            ("max_velocity_change", self.max_velocity_change),
            ("max_stamina", self.max_stamina),
            ("probe_distance", self.probe_distance),
            ("probe_radius", self.probe_radius),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.max_stamina == 0.0 {
            return Err(ConfigError::NoStamina(self.max_stamina));
        }

        Ok(())
    }
}
