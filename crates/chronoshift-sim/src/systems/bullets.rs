//! Bullet system: homing, motion, collision resolution and expiry.
//!
//! Both sides move in dilated time. Collisions resolve in a fixed order:
//! destructible clashes first, then enemy bullets against the player, then
//! player bullets against enemies (nearest enemy first).

use glam::Vec2;
use hecs::{Entity, World};

use chronoshift_core::components::{Bullet, Enemy, Trail};
use chronoshift_core::constants::*;
use chronoshift_core::enums::{BulletBehavior, Side};
use chronoshift_core::events::GameEvent;
use chronoshift_core::types::{Position, Velocity};

/// Capability table entry for a bullet behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomingProfile {
    pub strength: f32,
    pub activation_delay_secs: f32,
    pub destructible: bool,
}

pub fn homing_profile(behavior: BulletBehavior) -> HomingProfile {
    let (strength, activation_delay_secs, destructible) = match behavior {
        BulletBehavior::Standard => (0.0, 0.0, false),
        BulletBehavior::GentleHoming => (GENTLE_HOMING_STRENGTH, 0.0, false),
        BulletBehavior::AggressiveHoming => (AGGRESSIVE_HOMING_STRENGTH, 0.0, true),
        BulletBehavior::DelayedHoming => (DELAYED_HOMING_STRENGTH, DELAYED_HOMING_ACTIVATION_SECS, false),
        BulletBehavior::Seeker => (SEEKER_HOMING_STRENGTH, 0.0, false),
    };
    HomingProfile {
        strength,
        activation_delay_secs,
        destructible,
    }
}

/// Turn `velocity` through `min(1, strength * dt)` of the angle to `target`,
/// keeping its speed. A bullet heading straight away still turns.
pub fn steer_toward(velocity: Vec2, position: Vec2, target: Vec2, strength: f32, dilated_dt: f32) -> Vec2 {
    let speed = velocity.length();
    let (Some(heading), Some(desired)) = (velocity.try_normalize(), (target - position).try_normalize()) else {
        return velocity;
    };
    let t = (strength * dilated_dt).clamp(0.0, 1.0);
    // Signed counter-clockwise angle; exactly opposite yields +/-PI
    let angle = heading.perp_dot(desired).atan2(heading.dot(desired));
    Vec2::from_angle(angle * t).rotate(heading) * speed
}

/// Homing, delayed activation, integration, trail and lifetime.
pub fn advance(world: &mut World, player_position: Vec2, dilated_dt: f32, events: &mut Vec<GameEvent>) {
    let enemy_positions: Vec<Vec2> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (_, pos))| pos.0)
        .collect();

    for (_entity, (bullet, pos, vel, trail)) in
        world.query_mut::<(&mut Bullet, &mut Position, &mut Velocity, &mut Trail)>()
    {
        // Delayed homing flips on exactly once
        if !bullet.homing.active && bullet.homing.strength > 0.0 {
            bullet.homing.activation_delay_secs -= dilated_dt;
            if bullet.homing.activation_delay_secs <= 0.0 {
                bullet.homing.activation_delay_secs = 0.0;
                bullet.homing.active = true;
                events.push(GameEvent::HomingActivated {
                    bullet_id: bullet.id,
                    position: pos.0,
                });
            }
        }

        if bullet.homing.active && bullet.homing.strength > 0.0 {
            let target = match bullet.side {
                Side::Player => nearest_within(&enemy_positions, pos.0, HOMING_SEARCH_RADIUS),
                Side::Enemy => {
                    (pos.0.distance(player_position) <= HOMING_SEARCH_RADIUS).then_some(player_position)
                }
            };
            if let Some(target) = target {
                vel.0 = steer_toward(vel.0, pos.0, target, bullet.homing.strength, dilated_dt);
            }
        }

        pos.0 += vel.0 * dilated_dt;
        bullet.lifetime_secs -= dilated_dt;

        trail.positions.insert(0, pos.0);
        trail.positions.truncate(BULLET_TRAIL_LENGTH);
    }
}

fn nearest_within(candidates: &[Vec2], from: Vec2, radius: f32) -> Option<Vec2> {
    candidates
        .iter()
        .copied()
        .filter(|p| p.distance(from) <= radius)
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}

/// Snapshot of one bullet used by the resolution passes.
struct BulletProbe {
    entity: Entity,
    id: u32,
    side: Side,
    position: Vec2,
    destructible: bool,
}

fn probe_bullets(world: &World) -> Vec<BulletProbe> {
    let mut probes: Vec<BulletProbe> = world
        .query::<(&Bullet, &Position)>()
        .iter()
        .map(|(entity, (bullet, pos))| BulletProbe {
            entity,
            id: bullet.id,
            side: bullet.side,
            position: pos.0,
            destructible: bullet.destructible,
        })
        .collect();
    probes.sort_by_key(|p| p.id);
    probes
}

/// Destructible bullets and opposing bullets within the clash radius destroy
/// each other. Each destroyed pair is reported once, at the destructible
/// bullet's position.
pub fn resolve_clashes(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> Vec<Vec2> {
    despawn_buffer.clear();
    let probes = probe_bullets(world);
    let mut consumed = vec![false; probes.len()];
    let mut clashes = Vec::new();

    for i in 0..probes.len() {
        if consumed[i] || !probes[i].destructible {
            continue;
        }
        let hunted = &probes[i];
        let partner = probes
            .iter()
            .enumerate()
            .filter(|(j, other)| {
                !consumed[*j]
                    && other.side != hunted.side
                    && other.position.distance(hunted.position) <= BULLET_CLASH_RADIUS
            })
            .min_by(|(_, a), (_, b)| {
                a.position
                    .distance_squared(hunted.position)
                    .total_cmp(&b.position.distance_squared(hunted.position))
            })
            .map(|(j, _)| j);

        if let Some(j) = partner {
            consumed[i] = true;
            consumed[j] = true;
            despawn_buffer.push(hunted.entity);
            despawn_buffer.push(probes[j].entity);
            clashes.push(hunted.position);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    clashes
}

/// Enemy bullets touching the player. Returns the damage of each hit;
/// every touching bullet is destroyed whether or not the hit lands.
pub fn resolve_player_hits(world: &mut World, player_position: Vec2, despawn_buffer: &mut Vec<Entity>) -> Vec<f32> {
    despawn_buffer.clear();
    let reach = PLAYER_HIT_RADIUS + BULLET_RADIUS;
    let mut hits: Vec<(u32, f32)> = Vec::new();

    for (entity, (bullet, pos)) in world.query::<(&Bullet, &Position)>().iter() {
        if bullet.side == Side::Enemy && pos.0.distance(player_position) <= reach {
            hits.push((bullet.id, bullet.damage));
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    hits.sort_by_key(|(id, _)| *id);
    hits.into_iter().map(|(_, damage)| damage).collect()
}

/// One player bullet striking one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyHit {
    pub enemy: Entity,
    pub position: Vec2,
    /// Health reached zero on this hit.
    pub lethal: bool,
}

struct EnemyProbe {
    entity: Entity,
    id: u32,
    position: Vec2,
    hit_radius: f32,
    health: f32,
}

/// Player bullets against enemies, nearest enemy first.
///
/// A non-piercing bullet stops at its first hit and is removed. A piercing
/// bullet damages every overlapping enemy it has not already damaged. An
/// enemy killed earlier in the pass is not a valid target.
pub fn resolve_enemy_hits(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> Vec<EnemyHit> {
    despawn_buffer.clear();
    let mut enemies: Vec<EnemyProbe> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| EnemyProbe {
            entity,
            id: enemy.id,
            position: pos.0,
            hit_radius: enemy.hit_radius,
            health: enemy.health,
        })
        .collect();

    let mut shooters: Vec<(u32, Entity)> = world
        .query::<&Bullet>()
        .iter()
        .filter(|(_, bullet)| bullet.side == Side::Player)
        .map(|(entity, bullet)| (bullet.id, entity))
        .collect();
    shooters.sort_by_key(|(id, _)| *id);

    let mut hits = Vec::new();
    for (_, entity) in shooters {
        let Ok((bullet, pos)) = world.query_one_mut::<(&mut Bullet, &Position)>(entity) else {
            continue;
        };
        let origin = pos.0;

        let mut candidates: Vec<usize> = enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                e.health > 0.0
                    && !bullet.hit_enemies.contains(&e.id)
                    && e.position.distance(origin) <= e.hit_radius + BULLET_RADIUS
            })
            .map(|(i, _)| i)
            .collect();
        candidates.sort_by(|&a, &b| {
            enemies[a]
                .position
                .distance_squared(origin)
                .total_cmp(&enemies[b].position.distance_squared(origin))
                .then_with(|| enemies[a].id.cmp(&enemies[b].id))
        });

        for index in candidates {
            let target = &mut enemies[index];
            target.health = (target.health - bullet.damage).max(0.0);
            bullet.hit_enemies.push(target.id);
            hits.push(EnemyHit {
                enemy: target.entity,
                position: target.position,
                lethal: target.health <= 0.0,
            });
            if !bullet.piercing {
                despawn_buffer.push(entity);
                break;
            }
        }
    }

    // Write back health
    for probe in &enemies {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(probe.entity) {
            enemy.health = probe.health;
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    hits
}

/// Remove bullets that ran out of lifetime or left the arena.
pub fn expire(world: &mut World, half_extent: f32, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    for (entity, (bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        let out_of_bounds = pos.0.x.abs() > half_extent || pos.0.y.abs() > half_extent;
        if bullet.lifetime_secs <= 0.0 || out_of_bounds {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
