//! Enemy AI system: runs the steering FSM and attack patterns on every enemy.
//!
//! Bridges the ECS world and the pure functions in `chronoshift-enemy-ai`.
//! Bullets and beams are returned to the engine rather than spawned here.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chronoshift_core::components::{Enemy, SniperBeam, Telegraph};
use chronoshift_core::constants::*;
use chronoshift_core::enums::EnemyBehavior;
use chronoshift_core::types::{heading_of, Position, Velocity};
use chronoshift_enemy_ai::beam::{hitscan, track_aim};
use chronoshift_enemy_ai::fsm::{evaluate, SteeringContext};
use chronoshift_enemy_ai::patterns::{fire, BulletSpawn, BurstStep, PatternOutput};

/// Attacks produced by one AI pass.
#[derive(Debug, Default)]
pub struct EnemyAiOutput {
    /// Bullets to spawn now.
    pub volleys: Vec<BulletSpawn>,
    /// Bursts to schedule on the world clock, per firing enemy.
    pub bursts: Vec<(Entity, Vec<BurstStep>)>,
    /// Beams resolved this tick.
    pub beams: Vec<SniperBeam>,
}

pub fn run(
    world: &mut World,
    player_position: Vec2,
    elapsed_secs: f64,
    dilated_dt: f32,
    half_extent: f32,
    rng: &mut ChaCha8Rng,
) -> EnemyAiOutput {
    let mut output = EnemyAiOutput::default();

    for (entity, (enemy, pos, vel)) in world.query_mut::<(&mut Enemy, &mut Position, &mut Velocity)>() {
        // Telegraphing enemies do nothing else this tick
        if enemy.telegraph.active {
            tick_telegraph(enemy, pos.0, player_position, dilated_dt, &mut output.beams);
            continue;
        }

        let update = evaluate(&SteeringContext {
            archetype: enemy.archetype,
            enemy_id: enemy.id,
            position: pos.0,
            velocity: vel.0,
            player_position,
            speed: enemy.speed,
            elapsed_secs,
            dilated_dt,
        });
        enemy.behavior = update.behavior;
        enemy.yaw = update.yaw;
        vel.0 = update.velocity;
        pos.0 = (pos.0 + vel.0 * dilated_dt).clamp(Vec2::splat(-half_extent), Vec2::splat(half_extent));

        // Shoot timer holds at zero until the player is in range
        enemy.shoot_timer_secs = (enemy.shoot_timer_secs - dilated_dt).max(0.0);
        if enemy.shoot_timer_secs > 0.0 || pos.0.distance(player_position) > enemy.fire_range {
            continue;
        }
        enemy.shoot_timer_secs = enemy.shoot_interval_secs + rng.gen_range(0.0..SHOOT_JITTER_SECS);

        match fire(enemy.pattern, pos.0, player_position, enemy.bullet_speed, rng) {
            PatternOutput::Volley(bullets) => output.volleys.extend(bullets),
            PatternOutput::Burst(steps) => output.bursts.push((entity, steps)),
            PatternOutput::Telegraph { aim } => {
                enemy.telegraph = Telegraph {
                    active: true,
                    remaining_secs: TELEGRAPH_DURATION_SECS,
                    aim,
                };
                enemy.behavior = EnemyBehavior::Telegraph;
                vel.0 = Vec2::ZERO;
            }
        }
    }

    output
}

/// Re-aim and count down; at zero, resolve the hitscan and clear the telegraph.
fn tick_telegraph(
    enemy: &mut Enemy,
    origin: Vec2,
    player_position: Vec2,
    dilated_dt: f32,
    beams: &mut Vec<SniperBeam>,
) {
    let telegraph = &mut enemy.telegraph;
    telegraph.aim = track_aim(telegraph.aim, origin, player_position, dilated_dt);
    telegraph.remaining_secs -= dilated_dt;
    enemy.yaw = heading_of(telegraph.aim);

    if telegraph.remaining_secs > 0.0 {
        return;
    }

    let hit = hitscan(origin, telegraph.aim, player_position, SNIPER_HIT_RADIUS);
    beams.push(SniperBeam {
        origin,
        end: origin + telegraph.aim * SNIPER_BEAM_LENGTH,
        life_secs: SNIPER_BEAM_LIFE_SECS,
        hit,
    });
    enemy.telegraph = Telegraph::default();
    enemy.behavior = EnemyBehavior::default();
}
