//! Wave director: wave sizing, archetype unlocks, staggered spawns and
//! clear detection.

use glam::Vec2;
use hecs::World;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use chronoshift_core::components::Enemy;
use chronoshift_core::constants::*;
use chronoshift_core::enums::EnemyArchetype;
use chronoshift_core::events::GameEvent;

use crate::schedule::{ActionQueue, ScheduledAction};
use crate::world_setup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WavePhase {
    /// Waiting for the wave to be started.
    #[default]
    Pending,
    /// Spawns released or queued; clear is checked every tick.
    InProgress,
    /// Population emptied. The next wave waits on upgrade selection.
    Cleared,
}

/// Progress of the current wave.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    pub number: u32,
    pub phase: WavePhase,
    /// Scheduled spawns not yet released.
    pub spawns_pending: u32,
    pub spawned: u32,
}

impl WaveState {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }
}

/// Enemies in wave `n`.
pub fn enemy_count(wave: u32) -> u32 {
    WAVE_BASE_ENEMIES.saturating_add(WAVE_ENEMIES_PER_LEVEL.saturating_mul(wave))
}

/// Archetypes available from wave `n` onward.
pub fn unlocked_archetypes(wave: u32) -> Vec<EnemyArchetype> {
    let mut pool = vec![EnemyArchetype::Basic];
    if wave >= FAST_UNLOCK_WAVE {
        pool.push(EnemyArchetype::Fast);
    }
    if wave >= HEAVY_UNLOCK_WAVE {
        pool.push(EnemyArchetype::Heavy);
    }
    if wave >= SNIPER_UNLOCK_WAVE {
        pool.push(EnemyArchetype::Sniper);
    }
    pool
}

/// Start the current wave: queue its spawns on the world clock with a fixed stagger.
pub fn begin_wave(state: &mut WaveState, queue: &mut ActionQueue, world_now: f64, events: &mut Vec<GameEvent>) {
    let count = enemy_count(state.number);
    state.phase = WavePhase::InProgress;
    state.spawns_pending = count;
    state.spawned = 0;

    for i in 0..count {
        queue.schedule(
            world_now + (i as f32 * WAVE_SPAWN_STAGGER_SECS) as f64,
            ScheduledAction::SpawnEnemy { wave: state.number },
        );
    }
    events.push(GameEvent::WaveStarted {
        wave: state.number,
        enemy_count: count,
    });
    log::info!("wave {} started with {count} enemies", state.number);
}

/// Release one scheduled spawn. Stale spawns (wrong wave, none pending) are ignored.
#[allow(clippy::too_many_arguments)]
pub fn release_spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut WaveState,
    wave: u32,
    id: u32,
    player_position: Vec2,
    half_extent: f32,
    events: &mut Vec<GameEvent>,
) -> Option<(hecs::Entity, Vec2)> {
    if wave != state.number || state.phase != WavePhase::InProgress || state.spawns_pending == 0 {
        return None;
    }

    let pool = unlocked_archetypes(wave);
    let archetype = *pool.choose(rng)?;
    let position = world_setup::spawn_position(rng, player_position, half_extent);
    let entity = world_setup::spawn_enemy(world, rng, id, archetype, position);

    state.spawns_pending -= 1;
    state.spawned += 1;
    events.push(GameEvent::EnemySpawned {
        enemy_id: id,
        archetype,
        position,
    });
    log::debug!("spawned enemy {id} ({archetype:?}) at {position}");
    Some((entity, position))
}

/// Mark the wave cleared when it was populated, has released every spawn,
/// and no enemy remains. Returns true exactly once per wave.
pub fn check_clear(world: &World, state: &mut WaveState) -> bool {
    if state.phase != WavePhase::InProgress || state.spawns_pending > 0 || state.spawned == 0 {
        return false;
    }
    if world.query::<&Enemy>().iter().next().is_some() {
        return false;
    }
    state.phase = WavePhase::Cleared;
    true
}
