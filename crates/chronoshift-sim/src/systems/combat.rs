//! Damage, healing and enemy destruction.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use chronoshift_core::components::{Enemy, Player};
use chronoshift_core::constants::*;
use chronoshift_core::enums::PickupKind;
use chronoshift_core::events::GameEvent;
use chronoshift_core::types::Position;
use chronoshift_enemy_ai::profiles::get_profile;

use crate::run::RunState;
use crate::systems::particles::ParticleSystem;
use crate::world_setup;

/// Apply damage unless the time shield is up. Health clamps at zero.
/// Returns true if health changed.
pub fn damage_player(player: &mut Player, amount: f32, events: &mut Vec<GameEvent>) -> bool {
    if player.time_shield_remaining_secs > 0.0 {
        events.push(GameEvent::HitAbsorbed);
        return false;
    }
    player.health = (player.health - amount.max(0.0)).clamp(0.0, player.max_health);
    events.push(GameEvent::PlayerDamaged {
        amount,
        remaining: player.health,
    });
    true
}

/// Heal up to max health. Returns the amount actually restored.
pub fn heal_player(player: &mut Player, amount: f32, events: &mut Vec<GameEvent>) -> f32 {
    let before = player.health;
    player.health = (player.health + amount.max(0.0)).clamp(0.0, player.max_health);
    let restored = player.health - before;
    events.push(GameEvent::PlayerHealed { amount: restored });
    restored
}

/// Score, count and remove a dead enemy, maybe dropping a health pickup.
/// A no-op if the entity is already gone.
pub fn destroy_enemy(
    world: &mut World,
    entity: Entity,
    player: &Player,
    run: &mut RunState,
    rng: &mut ChaCha8Rng,
    particles: &mut ParticleSystem,
    events: &mut Vec<GameEvent>,
) -> bool {
    let Ok((enemy, position)) = world.query_one_mut::<(&Enemy, &Position)>(entity) else {
        return false;
    };
    let (id, archetype, position) = (enemy.id, enemy.archetype, position.0);

    let score_awarded = run.award(get_profile(archetype).score_value, player.combat.score_multiplier);
    run.kills += 1;
    events.push(GameEvent::EnemyDestroyed {
        enemy_id: id,
        archetype,
        position,
        score_awarded,
    });
    log::debug!("enemy {id} ({archetype:?}) destroyed, +{score_awarded}");

    particles.burst(position, 1.0, 20, 6.0);
    if rng.gen_bool(HEALTH_PICKUP_CHANCE) {
        world_setup::spawn_pickup(world, PickupKind::Health, position);
    }
    let _ = world.despawn(entity);
    true
}
