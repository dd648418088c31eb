//! CHRONOSHIFT headless application.
//!
//! Runs the simulation engine on its own thread at a fixed frame rate and
//! exposes a small control surface for sending commands and polling state.

pub mod autopilot;
pub mod control;
pub mod game_loop;
pub mod state;

pub use chronoshift_core as core;
