//! Discrete events emitted by the simulation for presentation and audio.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::UpgradeOfferView;

/// Lifecycle and feedback events, drained into every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    RunStarted,
    /// A wave began releasing its spawns.
    WaveStarted { wave: u32, enemy_count: u32 },
    EnemySpawned {
        enemy_id: u32,
        archetype: EnemyArchetype,
        position: Vec2,
    },
    EnemyDestroyed {
        enemy_id: u32,
        archetype: EnemyArchetype,
        position: Vec2,
        score_awarded: u64,
    },
    /// The enemy population emptied; `new_wave` is the advanced wave number.
    WaveCleared { new_wave: u32, bonus: u64 },
    PlayerDamaged { amount: f32, remaining: f32 },
    PlayerHealed { amount: f32 },
    /// A hit landed inside the time-shield window and was ignored.
    HitAbsorbed,
    TimeShieldArmed,
    DashStarted,
    /// A destructible bullet was shot down.
    BulletsClashed { position: Vec2, bonus: u64 },
    /// A delayed-homing bullet switched on its seeker.
    HomingActivated { bullet_id: u32, position: Vec2 },
    UpgradeOffered { options: Vec<UpgradeOfferView> },
    UpgradeApplied { id: UpgradeId },
    GameOver { final_score: u64 },
}
