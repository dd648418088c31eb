//! ECS components for hecs entities, plus the plain-data records the engine
//! keeps outside the world (player, particles, beams).
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Enemy state. Paired with `Position` and `Velocity` in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable identity, also seeds the wander term.
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub shoot_interval_secs: f32,
    /// Counts down in dilated time; the pattern fires at zero.
    pub shoot_timer_secs: f32,
    pub bullet_speed: f32,
    pub fire_range: f32,
    pub pattern: AttackPattern,
    pub hit_radius: f32,
    /// Facing (radians, 0 = North). Always toward the player.
    pub yaw: f32,
    pub behavior: EnemyBehavior,
    pub telegraph: Telegraph,
}

/// Sniper telegraph sub-state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Telegraph {
    pub active: bool,
    pub remaining_secs: f32,
    /// Unit aim direction of the warning line.
    pub aim: Vec2,
}

/// Bullet state. Paired with `Position`, `Velocity` and `Trail`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub side: Side,
    pub damage: f32,
    pub piercing: bool,
    pub behavior: BulletBehavior,
    pub homing: HomingState,
    /// Can be shot down by an opposing bullet (aggressive homers only).
    pub destructible: bool,
    pub lifetime_secs: f32,
    /// Enemy ids already damaged by this bullet (piercing rounds).
    pub hit_enemies: Vec<u32>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HomingState {
    pub strength: f32,
    pub activation_delay_secs: f32,
    pub active: bool,
}

/// Recent positions for trail rendering, newest first. Never used for collision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    pub positions: Vec<Vec2>,
}

/// Proximity pickup. Paired with `Position`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub lifetime_secs: f32,
    /// Drives the cosmetic bob.
    pub age_secs: f32,
}

/// Dash sub-state of the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashState {
    pub can_dash: bool,
    pub cooldown_remaining_secs: f32,
    pub cooldown_max_secs: f32,
    pub is_dashing: bool,
    pub dash_remaining_secs: f32,
    pub dash_velocity: Vec2,
}

impl Default for DashState {
    fn default() -> Self {
        Self {
            can_dash: true,
            cooldown_remaining_secs: 0.0,
            cooldown_max_secs: DASH_COOLDOWN_SECS,
            is_dashing: false,
            dash_remaining_secs: 0.0,
            dash_velocity: Vec2::ZERO,
        }
    }
}

/// The block of player parameters that upgrades mutate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatParams {
    pub damage: f32,
    pub fire_interval_secs: f32,
    pub bullet_count: u32,
    /// Angle between adjacent bullets of one volley.
    pub bullet_spread: f32,
    pub piercing: bool,
    pub seeker_rounds: bool,
    pub min_time_scale: f32,
    pub score_multiplier: f32,
    pub pickup_range: f32,
    pub has_time_shield: bool,
}

impl Default for CombatParams {
    fn default() -> Self {
        Self {
            damage: PLAYER_BULLET_DAMAGE,
            fire_interval_secs: PLAYER_FIRE_INTERVAL_SECS,
            bullet_count: 1,
            bullet_spread: PLAYER_BULLET_SPREAD,
            piercing: false,
            seeker_rounds: false,
            min_time_scale: DEFAULT_MIN_TIME_SCALE,
            score_multiplier: 1.0,
            pickup_range: DEFAULT_PICKUP_RANGE,
            has_time_shield: false,
        }
    }
}

/// The single player. Owned by the engine, not stored in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub max_health: f32,
    pub dash: DashState,
    pub combat: CombatParams,
    /// Real seconds until the next volley may fire.
    pub fire_cooldown_secs: f32,
    /// Real seconds of time-shield invulnerability left.
    pub time_shield_remaining_secs: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            dash: DashState::default(),
            combat: CombatParams::default(),
            fire_cooldown_secs: 0.0,
            time_shield_remaining_secs: 0.0,
        }
    }
}

/// Cosmetic particle. `y` is height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub life_secs: f32,
    pub max_life_secs: f32,
}

/// Visual record of a resolved sniper beam.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SniperBeam {
    pub origin: Vec2,
    pub end: Vec2,
    pub life_secs: f32,
    pub hit: bool,
}
