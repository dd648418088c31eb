//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine-owned
//! state they touch. They do not own state; the engine does.

pub mod bullets;
pub mod combat;
pub mod enemy_ai;
pub mod particles;
pub mod pickups;
pub mod player;
pub mod snapshot;
pub mod wave_director;
