//! Attack pattern generators.
//!
//! Each pattern turns "fire now" into either an immediate volley, a schedule
//! of staggered shots, or a telegraph request. Bullets are described, not
//! spawned; the simulation owns the world.

use glam::Vec2;
use rand::Rng;

use chronoshift_core::constants::*;
use chronoshift_core::enums::{AttackPattern, BulletBehavior};
use chronoshift_core::types::rotate_clockwise;

/// A bullet to be spawned by the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletSpawn {
    pub origin: Vec2,
    pub velocity: Vec2,
    pub behavior: BulletBehavior,
}

/// One deferred shot of a burst, relative to the moment the burst started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstStep {
    pub index: u32,
    pub delay_secs: f32,
    pub behavior: BulletBehavior,
}

/// What an enemy does when its shoot timer elapses.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternOutput {
    /// Spawn these bullets now.
    Volley(Vec<BulletSpawn>),
    /// Spawn one aimed shot per step, each at its delay.
    Burst(Vec<BurstStep>),
    /// Arm the telegraph with this initial aim.
    Telegraph { aim: Vec2 },
}

/// Fire `pattern` from `origin` at `target`.
pub fn fire<R: Rng + ?Sized>(
    pattern: AttackPattern,
    origin: Vec2,
    target: Vec2,
    bullet_speed: f32,
    rng: &mut R,
) -> PatternOutput {
    let aim = aim_direction(origin, target);
    match pattern {
        AttackPattern::Spread => PatternOutput::Volley(spread(origin, aim, bullet_speed, rng)),
        AttackPattern::Burst => PatternOutput::Burst(burst_steps()),
        AttackPattern::Ring => PatternOutput::Volley(ring(origin, aim, bullet_speed)),
        AttackPattern::Beam => PatternOutput::Telegraph { aim },
    }
}

/// Unit direction from `origin` toward `target`, north if they coincide.
pub fn aim_direction(origin: Vec2, target: Vec2) -> Vec2 {
    (target - origin).try_normalize().unwrap_or(Vec2::Y)
}

/// Three-bullet fan. The centre bullet may gently home.
pub fn spread<R: Rng + ?Sized>(origin: Vec2, aim: Vec2, speed: f32, rng: &mut R) -> Vec<BulletSpawn> {
    let centre_behavior = if rng.gen_bool(SPREAD_HOMING_CHANCE) {
        BulletBehavior::GentleHoming
    } else {
        BulletBehavior::Standard
    };

    [-SPREAD_ANGLE, 0.0, SPREAD_ANGLE]
        .iter()
        .map(|&angle| BulletSpawn {
            origin,
            velocity: rotate_clockwise(aim, angle) * speed,
            behavior: if angle == 0.0 {
                centre_behavior
            } else {
                BulletBehavior::Standard
            },
        })
        .collect()
}

/// Staggered five-shot sequence; the final shot is delayed-homing.
pub fn burst_steps() -> Vec<BurstStep> {
    (0..BURST_SHOTS)
        .map(|index| BurstStep {
            index,
            delay_secs: index as f32 * BURST_INTERVAL_SECS,
            behavior: if index + 1 == BURST_SHOTS {
                BulletBehavior::DelayedHoming
            } else {
                BulletBehavior::Standard
            },
        })
        .collect()
}

/// A single shot aimed at the target's position at the moment of firing.
pub fn aimed_shot(origin: Vec2, target: Vec2, speed: f32, behavior: BulletBehavior) -> BulletSpawn {
    BulletSpawn {
        origin,
        velocity: aim_direction(origin, target) * speed,
        behavior,
    }
}

/// Evenly spaced radial ring plus one aggressive homer aimed at the player.
pub fn ring(origin: Vec2, aim: Vec2, speed: f32) -> Vec<BulletSpawn> {
    let step = std::f32::consts::TAU / RING_BULLETS as f32;
    let mut bullets: Vec<BulletSpawn> = (0..RING_BULLETS)
        .map(|i| BulletSpawn {
            origin,
            velocity: rotate_clockwise(aim, i as f32 * step) * speed,
            behavior: BulletBehavior::Standard,
        })
        .collect();

    bullets.push(BulletSpawn {
        origin,
        velocity: aim * speed * 0.8,
        behavior: BulletBehavior::AggressiveHoming,
    });
    bullets
}
