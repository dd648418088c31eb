//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::UpgradeId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Run control ---
    /// Start a new run from wave 1 (or the configured starting wave).
    StartRun,
    /// Discard the current run and return to idle.
    ResetRun,
    Pause,
    Resume,

    // --- Movement and aim ---
    /// Held movement intent: `x` = strafe right, `y` = forward.
    /// Relative to the player's yaw; normalised on use.
    SetMoveIntent { x: f32, y: f32 },
    /// Pointer motion. Rotates the player's facing; its magnitude is the
    /// pointer-speed sample behind time dilation.
    Look { dx: f32, dy: f32, timestamp_secs: f64 },
    /// Request a dash (ignored while on cooldown).
    Dash,

    // --- Combat ---
    SetFiring { held: bool },

    // --- Progression ---
    /// Pick one of the currently offered upgrades.
    SelectUpgrade { id: UpgradeId },
}
