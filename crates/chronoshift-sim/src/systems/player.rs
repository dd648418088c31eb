//! Player controller: look, movement, dash and firing.
//!
//! Everything here integrates with the real delta. The player is never
//! subject to time dilation.

use glam::Vec2;

use chronoshift_core::components::Player;
use chronoshift_core::constants::*;
use chronoshift_core::enums::BulletBehavior;
use chronoshift_core::types::{heading_vector, rotate_clockwise};
use chronoshift_enemy_ai::patterns::BulletSpawn;

/// Held input state, updated by commands and read every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    /// `x` = strafe right, `y` = forward, relative to yaw.
    pub move_intent: Vec2,
    pub firing: bool,
}

/// Rotate facing by a pointer delta. Pitch stops just short of vertical.
pub fn apply_look(player: &mut Player, dx: f32, dy: f32) {
    player.yaw = (player.yaw + dx * LOOK_SENSITIVITY).rem_euclid(std::f32::consts::TAU);
    player.pitch = (player.pitch - dy * LOOK_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
}

/// World-space unit direction of a yaw-relative intent, if any is held.
pub fn world_intent(yaw: f32, intent: Vec2) -> Option<Vec2> {
    let forward = heading_vector(yaw);
    let right = Vec2::new(yaw.cos(), -yaw.sin());
    (right * intent.x + forward * intent.y).try_normalize()
}

/// Start a dash if allowed. Direction is the held intent, or forward if none.
pub fn try_dash(player: &mut Player, intent: Vec2) -> bool {
    if !player.dash.can_dash {
        return false;
    }
    let direction = world_intent(player.yaw, intent).unwrap_or_else(|| heading_vector(player.yaw));

    let dash = &mut player.dash;
    dash.can_dash = false;
    dash.is_dashing = true;
    dash.dash_remaining_secs = DASH_DURATION_SECS;
    dash.dash_velocity = direction * DASH_SPEED;
    dash.cooldown_remaining_secs = dash.cooldown_max_secs;
    player.velocity = dash.dash_velocity;
    true
}

/// Advance the player by one real-time tick. Returns the volley fired, if any.
pub fn run(player: &mut Player, input: &PlayerInput, real_dt: f32, half_extent: f32) -> Vec<BulletSpawn> {
    // 1. Velocity: dash overrides, intent sets, otherwise damp
    if player.dash.is_dashing {
        player.velocity = player.dash.dash_velocity;
        player.dash.dash_remaining_secs -= real_dt;
        if player.dash.dash_remaining_secs <= 0.0 {
            player.dash.dash_remaining_secs = 0.0;
            player.dash.is_dashing = false;
        }
    } else if let Some(direction) = world_intent(player.yaw, input.move_intent) {
        player.velocity = direction * PLAYER_MOVE_SPEED;
    } else {
        player.velocity *= PLAYER_VELOCITY_DAMPING;
    }

    // 2. Integrate and clamp to the arena
    let limit = (half_extent - PLAYER_WALL_MARGIN).max(0.0);
    player.position = (player.position + player.velocity * real_dt).clamp(Vec2::splat(-limit), Vec2::splat(limit));

    // 3. Cooldowns
    if !player.dash.can_dash {
        player.dash.cooldown_remaining_secs = (player.dash.cooldown_remaining_secs - real_dt).max(0.0);
        if player.dash.cooldown_remaining_secs == 0.0 {
            player.dash.can_dash = true;
        }
    }
    player.time_shield_remaining_secs = (player.time_shield_remaining_secs - real_dt).max(0.0);
    player.fire_cooldown_secs = (player.fire_cooldown_secs - real_dt).max(0.0);

    // 4. Firing
    if input.firing && player.fire_cooldown_secs <= 0.0 {
        player.fire_cooldown_secs = player.combat.fire_interval_secs;
        return volley(player);
    }
    Vec::new()
}

/// The bullets of one volley, fanned symmetrically about the facing.
pub fn volley(player: &Player) -> Vec<BulletSpawn> {
    let combat = &player.combat;
    let forward = heading_vector(player.yaw);
    let behavior = if combat.seeker_rounds {
        BulletBehavior::Seeker
    } else {
        BulletBehavior::Standard
    };
    let centre = (combat.bullet_count.max(1) - 1) as f32 / 2.0;

    (0..combat.bullet_count.max(1))
        .map(|i| BulletSpawn {
            origin: player.position,
            velocity: rotate_clockwise(forward, (i as f32 - centre) * combat.bullet_spread) * PLAYER_BULLET_SPEED,
            behavior,
        })
        .collect()
}
