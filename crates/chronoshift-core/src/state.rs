//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Active time scale in `[min_time_scale, 1]`.
    pub time_scale: f32,
    pub real_dt: f32,
    pub dilated_dt: f32,
    pub wave: u32,
    pub score: u64,
    pub kills: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub player_bullets: Vec<BulletView>,
    pub enemy_bullets: Vec<BulletView>,
    pub pickups: Vec<PickupView>,
    pub particles: Vec<ParticleView>,
    pub beams: Vec<BeamView>,
    /// Non-empty only while in `UpgradeSelection`.
    pub upgrade_offer: Vec<UpgradeOfferView>,
    pub acquired_upgrades: Vec<UpgradeId>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub velocity: Vec2,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub max_health: f32,
    pub can_dash: bool,
    pub dash_cooldown_remaining: f32,
    pub dash_cooldown_max: f32,
    pub is_dashing: bool,
    pub time_shield_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: u32,
    pub archetype: EnemyArchetype,
    pub position: Vec2,
    pub yaw: f32,
    pub health: f32,
    pub max_health: f32,
    pub behavior: EnemyBehavior,
    /// Warning line while a beam is being telegraphed.
    pub telegraph: Option<TelegraphView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TelegraphView {
    pub aim: Vec2,
    pub remaining_secs: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub bullet_id: u32,
    pub side: Side,
    pub position: Vec2,
    pub heading: f32,
    pub behavior: BulletBehavior,
    pub homing_active: bool,
    /// Newest first.
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: PickupKind,
    pub position: Vec2,
    /// Cosmetic bob height.
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec3,
    /// Remaining life over max life, for fading.
    pub life_fraction: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BeamView {
    pub origin: Vec2,
    pub end: Vec2,
    pub life_fraction: f32,
}

/// One card of an upgrade offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOfferView {
    pub id: UpgradeId,
    pub name: String,
    pub description: String,
    pub category: UpgradeCategory,
}
