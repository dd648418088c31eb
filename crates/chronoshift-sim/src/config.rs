//! Engine configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. Loading validates ranges so the engine can trust them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use chronoshift_core::constants::*;

/// Highest wave a run may start at. Wave sizes grow linearly, so this keeps
/// the first spawn schedule bounded.
pub const MAX_STARTING_WAVE: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same simulation.
    pub seed: u64,
    /// Half-width of the square arena.
    pub arena_half_extent: f32,
    /// Wave number a new run starts at.
    pub starting_wave: u32,
    /// Particle population cap. Never above `MAX_PARTICLES`.
    pub max_particles: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_half_extent: ARENA_HALF_EXTENT,
            starting_wave: 1,
            max_particles: MAX_PARTICLES,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Spawns need room to land outside the no-spawn ring around the player
        let min_extent = SPAWN_MIN_PLAYER_DISTANCE + SPAWN_EDGE_INSET;
        if !self.arena_half_extent.is_finite() || self.arena_half_extent <= min_extent {
            return Err(ConfigError::OutOfRange {
                field: "arena_half_extent",
                value: self.arena_half_extent as f64,
            });
        }
        if self.starting_wave == 0 || self.starting_wave > MAX_STARTING_WAVE {
            return Err(ConfigError::OutOfRange {
                field: "starting_wave",
                value: self.starting_wave as f64,
            });
        }
        if self.max_particles > MAX_PARTICLES {
            return Err(ConfigError::OutOfRange {
                field: "max_particles",
                value: self.max_particles as f64,
            });
        }
        Ok(())
    }
}
