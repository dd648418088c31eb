//! Enemy movement state machine.
//!
//! Pure functions that pick a movement policy (pursue / retreat / strafe)
//! from the archetype and the distance to the player, then steer the
//! velocity toward it. No ECS dependency; operates on plain data.

use glam::Vec2;

use chronoshift_core::constants::*;
use chronoshift_core::enums::{EnemyArchetype, EnemyBehavior};
use chronoshift_core::types::heading_of;

/// Input to the steering FSM for a single enemy.
pub struct SteeringContext {
    pub archetype: EnemyArchetype,
    pub enemy_id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub player_position: Vec2,
    pub speed: f32,
    /// Real elapsed seconds, used by the wander term.
    pub elapsed_secs: f64,
    pub dilated_dt: f32,
}

/// Output from the steering FSM.
pub struct SteeringUpdate {
    pub behavior: EnemyBehavior,
    pub velocity: Vec2,
    /// Facing toward the player.
    pub yaw: f32,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &SteeringContext) -> SteeringUpdate {
    let offset = ctx.player_position - ctx.position;
    let distance = offset.length();
    // Standing on the player: face north rather than propagate NaN
    let to_player = offset.try_normalize().unwrap_or(Vec2::Y);

    let behavior = select_behavior(ctx.archetype, distance);
    let policy = policy_direction(behavior, to_player, ctx.enemy_id);
    let direction = (policy + wander(ctx.elapsed_secs, ctx.enemy_id)).normalize_or_zero();

    SteeringUpdate {
        behavior,
        velocity: smooth_velocity(ctx.velocity, direction * ctx.speed, ctx.dilated_dt),
        yaw: heading_of(to_player),
    }
}

/// Pick the movement policy for an archetype at a given distance.
pub fn select_behavior(archetype: EnemyArchetype, distance: f32) -> EnemyBehavior {
    match archetype {
        EnemyArchetype::Sniper => {
            if distance > MELEE_RANGE {
                EnemyBehavior::Retreat
            } else {
                EnemyBehavior::Strafe
            }
        }
        EnemyArchetype::Basic | EnemyArchetype::Fast | EnemyArchetype::Heavy => {
            if distance > STRAFE_RANGE {
                EnemyBehavior::Pursue
            } else {
                EnemyBehavior::Strafe
            }
        }
    }
}

/// Unit direction for a policy. `to_player` must be normalised.
pub fn policy_direction(behavior: EnemyBehavior, to_player: Vec2, enemy_id: u32) -> Vec2 {
    match behavior {
        EnemyBehavior::Pursue => to_player,
        EnemyBehavior::Retreat => -to_player,
        EnemyBehavior::Strafe => {
            // Alternate circling direction by identity
            let perpendicular = Vec2::new(to_player.y, -to_player.x);
            if enemy_id % 2 == 0 {
                perpendicular
            } else {
                -perpendicular
            }
        }
        EnemyBehavior::Telegraph => Vec2::ZERO,
    }
}

/// Deterministic per-entity wander offset, a function of time and identity only.
pub fn wander(elapsed_secs: f64, enemy_id: u32) -> Vec2 {
    let t = elapsed_secs as f32;
    let phase = enemy_id as f32 * 1.618;
    Vec2::new((t * 1.3 + phase).sin(), (t * 0.9 + phase * 2.0).cos()) * WANDER_STRENGTH
}

/// Exponentially approach `target` at `ENEMY_STEERING_RATE`.
pub fn smooth_velocity(current: Vec2, target: Vec2, dilated_dt: f32) -> Vec2 {
    let t = (dilated_dt * ENEMY_STEERING_RATE).min(1.0);
    current + (target - current) * t
}
