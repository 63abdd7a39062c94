//! Game simulation - the main game loop.
//!
//! Runs every player's locomotion controller and body at a fixed tick rate
//! against a shared level.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use strider_physics::{ConfigError, LocomotionConfig, LocomotionState, Transition};
use thiserror::Error;

use crate::input::PlayerInput;
use crate::level::Level;
use crate::player::{EntityId, Player};

/// Errors raised while loading a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid locomotion config: {0}")]
    Invalid(#[from] ConfigError),

    #[error("tick rate must be positive")]
    ZeroTickRate,

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

/// Game simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation tick rate (ticks per second).
    pub tick_rate: u32,

    /// Downward acceleration (units/s²).
    pub gravity: f32,

    /// Mouse sensitivity.
    pub mouse_sensitivity: f32,

    /// Locomotion tuning shared by every player.
    pub locomotion: LocomotionConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            gravity: 9.81,
            mouse_sensitivity: 2.0,
            locomotion: LocomotionConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Get the time step per tick in seconds.
    ///
    /// A zero tick rate yields a zero step, so nothing advances.
    pub fn delta_time(&self) -> f32 {
        if self.tick_rate == 0 {
            return 0.0;
        }
        1.0 / self.tick_rate as f32
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json_str(&json)?;
        log::debug!("loaded simulation config from {}", path.display());
        Ok(config)
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.tick_rate == 0 {
            return Err(LoadError::ZeroTickRate);
        }
        for (field, value) in [
            ("gravity", self.gravity),
            ("mouse_sensitivity", self.mouse_sensitivity),
        ] {
            if !value.is_finite() {
                return Err(LoadError::NotFinite { field, value });
            }
        }
        self.locomotion.validate()?;
        Ok(())
    }
}

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    /// A player's locomotion state changed.
    Transition {
        player: EntityId,
        transition: Transition,
    },

    /// A player entered a zone.
    EnteredZone { player: EntityId, zone: String },
}

/// Per-player state in a [`Snapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: EntityId,
    pub name: String,
    pub state: LocomotionState,
    pub position: Vec3,
    pub velocity: Vec3,
    pub facing_yaw: f32,
    pub grounded: bool,
    pub airborne: bool,
    pub stamina: f32,
    pub stamina_fraction: f32,
    pub exhausted: bool,
    pub health: i32,
    pub zones: Vec<String>,
}

/// Serializable view of the whole simulation at one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub time: f32,
    pub players: Vec<PlayerSnapshot>,
}

/// The main game simulation.
#[derive(Debug)]
pub struct Simulation {
    /// Current frame/tick number.
    pub frame: u64,

    /// Simulation configuration.
    pub config: SimulationConfig,

    /// Current level.
    pub level: Level,

    /// All players in the game.
    pub players: Vec<Player>,

    /// Next entity ID to assign.
    next_entity_id: EntityId,
}

impl Simulation {
    /// Create a new simulation with the given configuration and level.
    pub fn new(config: SimulationConfig, level: Level) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("simulation config is unusable: {err}");
        }

        Self {
            frame: 0,
            config,
            level,
            players: Vec::new(),
            next_entity_id: 1,
        }
    }

    /// Create a simulation with default configuration and test arena.
    pub fn test() -> Self {
        Self::new(SimulationConfig::default(), Level::test_arena())
    }

    /// Add a player at the next spawn point in rotation.
    ///
    /// Returns the player's ID.
    pub fn add_player(&mut self, name: &str) -> EntityId {
        let spawn_index = self.players.len() % self.level.spawn_points.len().max(1);
        self.add_player_at(name, spawn_index)
    }

    /// Add a player at a specific spawn point.
    ///
    /// Falls back to the origin if the level has no such spawn.
    pub fn add_player_at(&mut self, name: &str, spawn_index: usize) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;

        let spawn = self.level.spawn(spawn_index);
        let position = spawn.map(|s| s.position).unwrap_or(Vec3::ZERO);
        let facing = spawn.map(|s| s.facing).unwrap_or(0.0);

        let player = Player::new(
            id,
            name.to_string(),
            self.level.collision().clone(),
            position,
            facing,
            self.config.locomotion.clone(),
        );
        log::debug!("player {} ({}) spawned at {:?}", id, name, position);

        self.players.push(player);
        id
    }

    /// Remove a player from the simulation.
    pub fn remove_player(&mut self, player_id: EntityId) {
        self.players.retain(|p| p.id != player_id);
    }

    /// Get a player by ID.
    pub fn get_player(&self, player_id: EntityId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Get a mutable reference to a player by ID.
    pub fn get_player_mut(&mut self, player_id: EntityId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// Advance the simulation by one tick.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Player inputs indexed by player position in the `players` array
    pub fn tick(&mut self, inputs: &[PlayerInput]) -> Vec<TickEvent> {
        let delta_time = self.config.delta_time();
        let mut events = Vec::new();

        for (i, player) in self.players.iter_mut().enumerate() {
            // Get input for this player (default if not provided)
            let input = inputs.get(i).cloned().unwrap_or_default();

            if let Some(transition) = player.tick(
                &input,
                self.config.mouse_sensitivity,
                self.config.gravity,
                delta_time,
            ) {
                events.push(TickEvent::Transition {
                    player: player.id,
                    transition,
                });
            }

            let current = self
                .level
                .zones_at(player.position())
                .map(|zone| zone.name.clone())
                .collect();
            for zone in player.update_zones(current) {
                log::debug!("player {} entered zone {}", player.id, zone);
                events.push(TickEvent::EnteredZone {
                    player: player.id,
                    zone,
                });
            }
        }

        self.frame += 1;
        events
    }

    /// Get the delta time for this simulation.
    pub fn delta_time(&self) -> f32 {
        self.config.delta_time()
    }

    /// Capture the current state of every player.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            time: self.frame as f32 * self.delta_time(),
            players: self
                .players
                .iter()
                .map(|player| PlayerSnapshot {
                    id: player.id,
                    name: player.name.clone(),
                    state: player.state(),
                    position: player.position(),
                    velocity: player.velocity(),
                    facing_yaw: player.body().facing_yaw,
                    grounded: player.on_ground(),
                    airborne: player.state().is_airborne(),
                    stamina: player.stamina().current(),
                    stamina_fraction: player.stamina().fraction(),
                    exhausted: player.stamina().is_exhausted(),
                    health: player.health,
                    zones: player.zones().to_vec(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
