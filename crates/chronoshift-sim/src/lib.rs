//! Simulation engine for CHRONOSHIFT.
//!
//! Owns the hecs ECS world and the player, splits every frame into real and
//! dilated time, and produces GameStateSnapshots for the presentation layer.

pub mod config;
pub mod engine;
pub mod run;
pub mod schedule;
pub mod systems;
pub mod time_dilation;
pub mod upgrades;
pub mod world_setup;

pub use chronoshift_core as core;
pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
