//! Sniper beam geometry: telegraph tracking and hitscan resolution.

use glam::Vec2;

use chronoshift_core::constants::TELEGRAPH_TRACK_RATE;

/// Turn the telegraph aim toward the player at a bounded rate.
///
/// The result is always a unit vector; a degenerate blend keeps the old aim.
pub fn track_aim(current: Vec2, origin: Vec2, target: Vec2, dilated_dt: f32) -> Vec2 {
    let desired = match (target - origin).try_normalize() {
        Some(d) => d,
        None => return current,
    };
    let t = (dilated_dt * TELEGRAPH_TRACK_RATE).min(1.0);
    current.lerp(desired, t).try_normalize().unwrap_or(current)
}

/// Hitscan test: does a ray from `origin` along `aim` pass within `radius`
/// of `target`? Targets behind the origin are never hit.
pub fn hitscan(origin: Vec2, aim: Vec2, target: Vec2, radius: f32) -> bool {
    let to_target = target - origin;
    let along = to_target.dot(aim);
    if along < 0.0 {
        return false;
    }
    let closest = origin + aim * along;
    closest.distance(target) <= radius
}
