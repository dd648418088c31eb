//! Pickup system: bob, decay and proximity collection.

use glam::Vec2;
use hecs::{Entity, World};

use chronoshift_core::components::{Pickup, Player};
use chronoshift_core::constants::*;
use chronoshift_core::enums::PickupKind;
use chronoshift_core::events::GameEvent;
use chronoshift_core::types::Position;

use crate::systems::combat;

/// Cosmetic bob height for a pickup of the given age.
pub fn bob_height(age_secs: f32) -> f32 {
    PICKUP_BOB_AMPLITUDE * (age_secs * PICKUP_BOB_FREQUENCY).sin()
}

pub fn run(
    world: &mut World,
    player: &mut Player,
    dilated_dt: f32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let player_position: Vec2 = player.position;
    let range = player.combat.pickup_range;
    let mut collected: Vec<PickupKind> = Vec::new();

    for (entity, (pickup, pos)) in world.query_mut::<(&mut Pickup, &Position)>() {
        pickup.age_secs += dilated_dt;
        pickup.lifetime_secs -= dilated_dt;

        if pos.0.distance(player_position) <= range {
            collected.push(pickup.kind);
            despawn_buffer.push(entity);
        } else if pickup.lifetime_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    for kind in collected {
        match kind {
            PickupKind::Health => {
                combat::heal_player(player, HEALTH_PICKUP_AMOUNT, events);
            }
        }
    }
}
