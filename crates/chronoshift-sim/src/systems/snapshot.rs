//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. Lists are sorted by id so equal worlds produce
//! equal snapshots.

use hecs::World;

use chronoshift_core::components::*;
use chronoshift_core::enums::*;
use chronoshift_core::events::GameEvent;
use chronoshift_core::state::*;
use chronoshift_core::types::{heading_of, Position, SimTime, Velocity};

use crate::run::RunState;
use crate::systems::particles::ParticleSystem;
use crate::systems::pickups::bob_height;
use crate::time_dilation::DilationStep;
use crate::upgrades;

/// Everything outside the world that the snapshot reads.
pub struct SnapshotSources<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub step: &'a DilationStep,
    pub player: &'a Player,
    pub run: &'a RunState,
    pub particles: &'a ParticleSystem,
    pub beams: &'a [SniperBeam],
}

pub fn build_snapshot(world: &World, sources: SnapshotSources<'_>, events: Vec<GameEvent>) -> GameStateSnapshot {
    let (player_bullets, enemy_bullets) = build_bullets(world);

    GameStateSnapshot {
        time: *sources.time,
        phase: sources.phase,
        time_scale: sources.step.time_scale,
        real_dt: sources.step.real_dt,
        dilated_dt: sources.step.dilated_dt,
        wave: sources.run.wave.number,
        score: sources.run.score,
        kills: sources.run.kills,
        player: build_player(sources.player),
        enemies: build_enemies(world),
        player_bullets,
        enemy_bullets,
        pickups: build_pickups(world),
        particles: sources
            .particles
            .iter()
            .map(|p| ParticleView {
                position: p.position,
                life_fraction: life_fraction(p.life_secs, p.max_life_secs),
            })
            .collect(),
        beams: sources
            .beams
            .iter()
            .map(|b| BeamView {
                origin: b.origin,
                end: b.end,
                life_fraction: life_fraction(b.life_secs, chronoshift_core::constants::SNIPER_BEAM_LIFE_SECS),
            })
            .collect(),
        upgrade_offer: sources
            .run
            .offer
            .iter()
            .filter_map(|id| upgrades::offer_view(*id))
            .collect(),
        acquired_upgrades: sources.run.acquired.clone(),
        events,
    }
}

fn life_fraction(remaining: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    (remaining / max).clamp(0.0, 1.0)
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        velocity: player.velocity,
        yaw: player.yaw,
        pitch: player.pitch,
        health: player.health,
        max_health: player.max_health,
        can_dash: player.dash.can_dash,
        dash_cooldown_remaining: player.dash.cooldown_remaining_secs,
        dash_cooldown_max: player.dash.cooldown_max_secs,
        is_dashing: player.dash.is_dashing,
        time_shield_active: player.time_shield_remaining_secs > 0.0,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            enemy_id: enemy.id,
            archetype: enemy.archetype,
            position: pos.0,
            yaw: enemy.yaw,
            health: enemy.health,
            max_health: enemy.max_health,
            behavior: enemy.behavior,
            telegraph: enemy.telegraph.active.then_some(TelegraphView {
                aim: enemy.telegraph.aim,
                remaining_secs: enemy.telegraph.remaining_secs,
            }),
        })
        .collect();
    enemies.sort_by_key(|e| e.enemy_id);
    enemies
}

fn build_bullets(world: &World) -> (Vec<BulletView>, Vec<BulletView>) {
    let mut views: Vec<BulletView> = world
        .query::<(&Bullet, &Position, &Velocity, &Trail)>()
        .iter()
        .map(|(_, (bullet, pos, vel, trail))| BulletView {
            bullet_id: bullet.id,
            side: bullet.side,
            position: pos.0,
            heading: heading_of(vel.0),
            behavior: bullet.behavior,
            homing_active: bullet.homing.active,
            trail: trail.positions.clone(),
        })
        .collect();
    views.sort_by_key(|b| b.bullet_id);
    views.into_iter().partition(|b| b.side == Side::Player)
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut pickups: Vec<(f32, PickupView)> = world
        .query::<(&Pickup, &Position)>()
        .iter()
        .map(|(_, (pickup, pos))| {
            (
                pickup.lifetime_secs,
                PickupView {
                    kind: pickup.kind,
                    position: pos.0,
                    height: bob_height(pickup.age_secs),
                },
            )
        })
        .collect();
    // Oldest first
    pickups.sort_by(|a, b| a.0.total_cmp(&b.0));
    pickups.into_iter().map(|(_, view)| view).collect()
}
