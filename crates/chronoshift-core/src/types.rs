//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ground-plane position. `x` = East, `y` = North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Ground-plane velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking across both timing domains.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed while a run was active.
    pub tick: u64,
    /// Accumulated real (wall-clock) seconds.
    pub real_elapsed_secs: f64,
    /// Accumulated dilated seconds. Drives the world clock.
    pub world_elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick in both domains.
    pub fn advance(&mut self, real_dt: f32, dilated_dt: f32) {
        self.tick += 1;
        self.real_elapsed_secs += real_dt as f64;
        self.world_elapsed_secs += dilated_dt as f64;
    }
}

/// Unit direction for a heading in radians (0 = North, clockwise).
pub fn heading_vector(yaw: f32) -> Vec2 {
    Vec2::new(yaw.sin(), yaw.cos())
}

/// Heading in radians (0 = North, clockwise) of a direction vector.
pub fn heading_of(dir: Vec2) -> f32 {
    dir.x.atan2(dir.y)
}

/// Rotate `v` by `angle` radians clockwise (same sense as headings).
pub fn rotate_clockwise(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c + v.y * s, -v.x * s + v.y * c)
}
