//! Upgrade catalog and application.
//!
//! Each catalog entry is a declarative list of `UpgradeEffect`s, applied to
//! the player's combat parameters by a single interpreter.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use chronoshift_core::components::Player;
use chronoshift_core::enums::{UpgradeCategory, UpgradeId};
use chronoshift_core::state::UpgradeOfferView;

/// Shortest fire interval any combination of upgrades can reach.
const MIN_FIRE_INTERVAL_SECS: f32 = 0.03;
/// Lowest time-scale floor an upgrade may set.
const MIN_TIME_SCALE_FLOOR: f32 = 0.01;

/// One stat mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum UpgradeEffect {
    ScaleFireInterval(f32),
    ScaleDamage(f32),
    SetVolley { bullet_count: u32, spread: f32 },
    EnablePiercing,
    EnableSeekerRounds,
    /// Raise max health and heal by the same amount.
    AddMaxHealth(f32),
    EnableTimeShield,
    SetDashCooldown(f32),
    SetMinTimeScale(f32),
    ScaleScoreMultiplier(f32),
    ScalePickupRange(f32),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpgradeDefinition {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: UpgradeCategory,
    pub effects: &'static [UpgradeEffect],
}

pub const CATALOG: &[UpgradeDefinition] = &[
    UpgradeDefinition {
        id: UpgradeId::RapidFire,
        name: "Rapid Fire",
        description: "Fire 40% faster.",
        category: UpgradeCategory::Weapon,
        effects: &[UpgradeEffect::ScaleFireInterval(0.6)],
    },
    UpgradeDefinition {
        id: UpgradeId::HeavyRounds,
        name: "Heavy Rounds",
        description: "Bullets deal 50% more damage.",
        category: UpgradeCategory::Weapon,
        effects: &[UpgradeEffect::ScaleDamage(1.5)],
    },
    UpgradeDefinition {
        id: UpgradeId::Shotgun,
        name: "Shotgun",
        description: "Fire a seven-bullet fan at a slower rate.",
        category: UpgradeCategory::Weapon,
        effects: &[
            UpgradeEffect::SetVolley {
                bullet_count: 7,
                spread: 0.12,
            },
            UpgradeEffect::ScaleFireInterval(1.5),
        ],
    },
    UpgradeDefinition {
        id: UpgradeId::PiercingRounds,
        name: "Piercing Rounds",
        description: "Bullets pass through enemies.",
        category: UpgradeCategory::Weapon,
        effects: &[UpgradeEffect::EnablePiercing],
    },
    UpgradeDefinition {
        id: UpgradeId::SeekerRounds,
        name: "Seeker Rounds",
        description: "Bullets steer toward the nearest enemy.",
        category: UpgradeCategory::Weapon,
        effects: &[UpgradeEffect::EnableSeekerRounds],
    },
    UpgradeDefinition {
        id: UpgradeId::Vitality,
        name: "Vitality",
        description: "+50 max health, healed immediately.",
        category: UpgradeCategory::Defensive,
        effects: &[UpgradeEffect::AddMaxHealth(50.0)],
    },
    UpgradeDefinition {
        id: UpgradeId::TimeShield,
        name: "Time Shield",
        description: "Slowing time hard grants a brief invulnerability window.",
        category: UpgradeCategory::Defensive,
        effects: &[UpgradeEffect::EnableTimeShield],
    },
    UpgradeDefinition {
        id: UpgradeId::QuickDash,
        name: "Quick Dash",
        description: "Dash cooldown drops to 1.2 seconds.",
        category: UpgradeCategory::Defensive,
        effects: &[UpgradeEffect::SetDashCooldown(1.2)],
    },
    UpgradeDefinition {
        id: UpgradeId::TemporalMastery,
        name: "Temporal Mastery",
        description: "Time can slow down to 5%.",
        category: UpgradeCategory::Utility,
        effects: &[UpgradeEffect::SetMinTimeScale(0.05)],
    },
    UpgradeDefinition {
        id: UpgradeId::BountyHunter,
        name: "Bounty Hunter",
        description: "Earn 50% more score.",
        category: UpgradeCategory::Utility,
        effects: &[UpgradeEffect::ScaleScoreMultiplier(1.5)],
    },
    UpgradeDefinition {
        id: UpgradeId::Magnetism,
        name: "Magnetism",
        description: "Double pickup range.",
        category: UpgradeCategory::Utility,
        effects: &[UpgradeEffect::ScalePickupRange(2.0)],
    },
];

pub fn definition(id: UpgradeId) -> Option<&'static UpgradeDefinition> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Apply every effect of `id` to the player. Returns false for an unknown id.
pub fn apply(id: UpgradeId, player: &mut Player) -> bool {
    let Some(def) = definition(id) else {
        return false;
    };
    for effect in def.effects {
        apply_effect(*effect, player);
    }
    true
}

/// Apply one effect, clamping every touched value to its valid range.
pub fn apply_effect(effect: UpgradeEffect, player: &mut Player) {
    let combat = &mut player.combat;
    match effect {
        UpgradeEffect::ScaleFireInterval(factor) => {
            combat.fire_interval_secs = (combat.fire_interval_secs * factor).max(MIN_FIRE_INTERVAL_SECS);
        }
        UpgradeEffect::ScaleDamage(factor) => {
            combat.damage = (combat.damage * factor).max(0.0);
        }
        UpgradeEffect::SetVolley {
            bullet_count,
            spread,
        } => {
            combat.bullet_count = bullet_count.max(1);
            combat.bullet_spread = spread.max(0.0);
        }
        UpgradeEffect::EnablePiercing => combat.piercing = true,
        UpgradeEffect::EnableSeekerRounds => combat.seeker_rounds = true,
        UpgradeEffect::AddMaxHealth(amount) => {
            player.max_health = (player.max_health + amount).max(1.0);
            player.health = (player.health + amount).clamp(0.0, player.max_health);
        }
        UpgradeEffect::EnableTimeShield => combat.has_time_shield = true,
        UpgradeEffect::SetDashCooldown(secs) => {
            let dash = &mut player.dash;
            dash.cooldown_max_secs = secs.max(0.0);
            dash.cooldown_remaining_secs = dash.cooldown_remaining_secs.min(dash.cooldown_max_secs);
        }
        UpgradeEffect::SetMinTimeScale(scale) => {
            combat.min_time_scale = scale.clamp(MIN_TIME_SCALE_FLOOR, 1.0);
        }
        UpgradeEffect::ScaleScoreMultiplier(factor) => {
            combat.score_multiplier = (combat.score_multiplier * factor).max(0.0);
        }
        UpgradeEffect::ScalePickupRange(factor) => {
            combat.pickup_range = (combat.pickup_range * factor).max(0.0);
        }
    }
}

/// Draw up to `count` distinct upgrades not yet acquired, uniformly at random.
pub fn draw_offer<R: Rng + ?Sized>(acquired: &[UpgradeId], rng: &mut R, count: usize) -> Vec<UpgradeId> {
    let mut candidates: Vec<UpgradeId> = CATALOG
        .iter()
        .map(|d| d.id)
        .filter(|id| !acquired.contains(id))
        .collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

pub fn offer_view(id: UpgradeId) -> Option<UpgradeOfferView> {
    definition(id).map(|d| UpgradeOfferView {
        id: d.id,
        name: d.name.to_string(),
        description: d.description.to_string(),
        category: d.category,
    })
}
