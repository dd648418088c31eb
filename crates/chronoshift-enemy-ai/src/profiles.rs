//! Archetype-specific behavioral profiles.
//!
//! Consolidates per-archetype parameters for spawning, steering and attacks.

use chronoshift_core::enums::{AttackPattern, EnemyArchetype};

/// Behavioral profile for an enemy archetype.
#[derive(Debug, Clone, Copy)]
pub struct EnemyProfile {
    pub max_health: f32,
    /// Cruise speed (units/s of dilated time).
    pub speed: f32,
    /// Base seconds between attacks, before jitter.
    pub shoot_interval_secs: f32,
    /// Bullet speed. Unused by beam attackers.
    pub bullet_speed: f32,
    /// Attacks only fire while the player is within this range.
    pub fire_range: f32,
    pub pattern: AttackPattern,
    /// Base score before the player's multiplier.
    pub score_value: u64,
    pub hit_radius: f32,
}

/// Get the behavioral profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyProfile {
    match archetype {
        EnemyArchetype::Basic => EnemyProfile {
            max_health: 50.0,
            speed: 4.0,
            shoot_interval_secs: 2.0,
            bullet_speed: 12.0,
            fire_range: 25.0,
            pattern: AttackPattern::Spread,
            score_value: 100,
            hit_radius: 1.0,
        },
        EnemyArchetype::Fast => EnemyProfile {
            max_health: 30.0,
            speed: 7.0,
            shoot_interval_secs: 1.5,
            bullet_speed: 15.0,
            fire_range: 20.0,
            pattern: AttackPattern::Burst,
            score_value: 150,
            hit_radius: 0.8,
        },
        EnemyArchetype::Heavy => EnemyProfile {
            max_health: 150.0,
            speed: 2.5,
            shoot_interval_secs: 3.0,
            bullet_speed: 9.0,
            fire_range: 22.0,
            pattern: AttackPattern::Ring,
            score_value: 300,
            hit_radius: 1.5,
        },
        EnemyArchetype::Sniper => EnemyProfile {
            max_health: 40.0,
            speed: 3.5,
            shoot_interval_secs: 4.0,
            bullet_speed: 0.0,
            fire_range: 45.0,
            pattern: AttackPattern::Beam,
            score_value: 250,
            hit_radius: 0.9,
        },
    }
}
