//! Per-run progression state.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use chronoshift_core::enums::UpgradeId;

use crate::systems::wave_director::WaveState;

/// Score, wave progress and upgrade history for the current run.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub score: u64,
    pub kills: u32,
    pub wave: WaveState,
    /// Upgrades applied this run; never offered again.
    pub acquired: Vec<UpgradeId>,
    /// Pending offer. Non-empty only during upgrade selection.
    pub offer: Vec<UpgradeId>,
    next_id: u32,
}

impl RunState {
    pub fn new(starting_wave: u32) -> Self {
        Self {
            wave: WaveState::new(starting_wave),
            ..Self::default()
        }
    }

    /// Allocate an id for an enemy or bullet. Ids are unique within a run.
    pub fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Add `base` scaled by `multiplier` to the score and return the award.
    pub fn award(&mut self, base: u64, multiplier: f32) -> u64 {
        let awarded = (base as f64 * multiplier.max(0.0) as f64).round() as u64;
        self.score += awarded;
        awarded
    }
}
