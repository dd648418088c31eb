//! Entity spawn factories.
//!
//! Creates enemy, bullet and pickup entities with their component bundles.

use glam::Vec2;
use hecs::World;
use rand::Rng;

use chronoshift_core::components::*;
use chronoshift_core::constants::*;
use chronoshift_core::enums::*;
use chronoshift_core::types::{Position, Velocity};
use chronoshift_enemy_ai::profiles::get_profile;

use crate::systems::bullets::homing_profile;

/// Everything needed to put one bullet into the world.
#[derive(Debug, Clone, Copy)]
pub struct BulletSpec {
    pub side: Side,
    pub origin: Vec2,
    pub velocity: Vec2,
    pub behavior: BulletBehavior,
    pub damage: f32,
    pub piercing: bool,
}

/// Spawn an enemy of `archetype` at `position`.
/// The first shot waits a full interval plus jitter.
pub fn spawn_enemy<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    id: u32,
    archetype: EnemyArchetype,
    position: Vec2,
) -> hecs::Entity {
    let profile = get_profile(archetype);
    let enemy = Enemy {
        id,
        archetype,
        health: profile.max_health,
        max_health: profile.max_health,
        speed: profile.speed,
        shoot_interval_secs: profile.shoot_interval_secs,
        shoot_timer_secs: profile.shoot_interval_secs + rng.gen_range(0.0..SHOOT_JITTER_SECS),
        bullet_speed: profile.bullet_speed,
        fire_range: profile.fire_range,
        pattern: profile.pattern,
        hit_radius: profile.hit_radius,
        yaw: 0.0,
        behavior: EnemyBehavior::default(),
        telegraph: Telegraph::default(),
    };
    world.spawn((enemy, Position(position), Velocity(Vec2::ZERO)))
}

pub fn spawn_bullet(world: &mut World, id: u32, spec: BulletSpec) -> hecs::Entity {
    let profile = homing_profile(spec.behavior);
    let lifetime_secs = match spec.side {
        Side::Player => PLAYER_BULLET_LIFETIME_SECS,
        Side::Enemy => ENEMY_BULLET_LIFETIME_SECS,
    };
    let bullet = Bullet {
        id,
        side: spec.side,
        damage: spec.damage,
        piercing: spec.piercing,
        behavior: spec.behavior,
        homing: HomingState {
            strength: profile.strength,
            activation_delay_secs: profile.activation_delay_secs,
            active: profile.strength > 0.0 && profile.activation_delay_secs <= 0.0,
        },
        destructible: profile.destructible,
        lifetime_secs,
        hit_enemies: Vec::new(),
    };
    world.spawn((
        bullet,
        Position(spec.origin),
        Velocity(spec.velocity),
        Trail::default(),
    ))
}

pub fn spawn_pickup(world: &mut World, kind: PickupKind, position: Vec2) -> hecs::Entity {
    let pickup = Pickup {
        kind,
        lifetime_secs: PICKUP_LIFETIME_SECS,
        age_secs: 0.0,
    };
    world.spawn((pickup, Position(position)))
}

/// Sample a spawn point on one of the four arena edges, away from the player.
///
/// Resamples up to `SPAWN_MAX_ATTEMPTS` times; if every sample is too close
/// the last one is used.
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, player_position: Vec2, half_extent: f32) -> Vec2 {
    let edge = (half_extent - SPAWN_EDGE_INSET).max(0.0);
    let mut candidate = Vec2::ZERO;
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let along = rng.gen_range(-edge..=edge);
        candidate = match rng.gen_range(0..4u8) {
            0 => Vec2::new(along, edge),
            1 => Vec2::new(edge, along),
            2 => Vec2::new(along, -edge),
            _ => Vec2::new(-edge, along),
        };
        if candidate.distance(player_position) >= SPAWN_MIN_PLAYER_DISTANCE {
            break;
        }
    }
    candidate
}
