//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player and the run state,
//! processes player commands, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, so it can be driven by any
//! clock and tested deterministically.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chronoshift_core::commands::PlayerCommand;
use chronoshift_core::components::{Enemy, Player, SniperBeam};
use chronoshift_core::constants::*;
use chronoshift_core::enums::{GamePhase, Side, UpgradeId};
use chronoshift_core::events::GameEvent;
use chronoshift_core::state::GameStateSnapshot;
use chronoshift_core::types::{Position, SimTime};
use chronoshift_enemy_ai::patterns::{aimed_shot, BulletSpawn};

use crate::config::SimConfig;
use crate::run::RunState;
use crate::schedule::{ActionQueue, ScheduledAction};
use crate::systems;
use crate::systems::particles::ParticleSystem;
use crate::systems::player::PlayerInput;
use crate::systems::snapshot::SnapshotSources;
use crate::systems::wave_director::{self, WavePhase};
use crate::time_dilation::{DilationStep, TimeDilationController};
use crate::upgrades;
use crate::world_setup::{self, BulletSpec};

/// Salt for the cosmetic RNG so it never mirrors the gameplay stream.
const PARTICLE_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Player,
    input: PlayerInput,
    dilation: TimeDilationController,
    last_step: DilationStep,
    /// Keyed to the dilated clock: spawns and bursts.
    world_actions: ActionQueue,
    /// Keyed to the real clock: dash trail and wave starts.
    real_actions: ActionQueue,
    run: RunState,
    particles: ParticleSystem,
    beams: Vec<SniperBeam>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    last_clock_secs: Option<f64>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::default(),
            input: PlayerInput::default(),
            dilation: TimeDilationController::new(),
            last_step: DilationStep::frozen(1.0),
            world_actions: ActionQueue::new(),
            real_actions: ActionQueue::new(),
            run: RunState::new(config.starting_wave),
            particles: ParticleSystem::new(config.max_particles, config.seed ^ PARTICLE_SEED_SALT),
            beams: Vec::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            last_clock_secs: None,
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation to wall-clock time `now_secs` and return the
    /// resulting snapshot. The real delta is clamped to `[0, MAX_REAL_DT]`;
    /// the first tick has a zero delta.
    pub fn tick(&mut self, now_secs: f64) -> GameStateSnapshot {
        let real_dt = match self.last_clock_secs {
            // max/min rather than clamp so a NaN clock collapses to zero
            Some(previous) => ((now_secs - previous) as f32).max(0.0).min(MAX_REAL_DT),
            None => 0.0,
        };
        if now_secs.is_finite() {
            self.last_clock_secs = Some(now_secs);
        }

        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(now_secs, real_dt);
        } else {
            self.last_step = DilationStep::frozen(self.dilation.scale());
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotSources {
                time: &self.time,
                phase: self.phase,
                step: &self.last_step,
                player: &self.player,
                run: &self.run,
                particles: &self.particles,
                beams: &self.beams,
            },
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current smoothed time scale.
    pub fn time_scale(&self) -> f32 {
        self.dilation.scale()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy outside the wave schedule (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        archetype: chronoshift_core::enums::EnemyArchetype,
        position: Vec2,
    ) -> Entity {
        let id = self.run.next_id();
        world_setup::spawn_enemy(&mut self.world, &mut self.rng, id, archetype, position)
    }

    /// Spawn a bullet directly (for testing).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, spec: BulletSpec) -> Entity {
        let id = self.run.next_id();
        world_setup::spawn_bullet(&mut self.world, id, spec)
    }

    /// Queue an action on the world clock (for testing).
    #[cfg(test)]
    pub fn schedule_world_action(&mut self, at: f64, action: ScheduledAction) {
        self.world_actions.schedule(at, action);
    }

    /// Destroy every enemy through the normal destruction path (for testing).
    #[cfg(test)]
    pub fn kill_all_enemies(&mut self) {
        let enemies: Vec<Entity> = self.world.query::<&Enemy>().iter().map(|(e, _)| e).collect();
        for entity in enemies {
            systems::combat::destroy_enemy(
                &mut self.world,
                entity,
                &self.player,
                &mut self.run,
                &mut self.rng,
                &mut self.particles,
                &mut self.events,
            );
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::GameOver) {
                    self.start_run();
                } else {
                    log::warn!("StartRun ignored in phase {:?}", self.phase);
                }
            }
            PlayerCommand::ResetRun => self.reset(),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetMoveIntent { x, y } => {
                let intent = Vec2::new(x, y);
                self.input.move_intent = if intent.is_finite() { intent } else { Vec2::ZERO };
            }
            PlayerCommand::Look {
                dx,
                dy,
                timestamp_secs,
            } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                if !(dx.is_finite() && dy.is_finite() && timestamp_secs.is_finite()) {
                    log::warn!("non-finite look sample dropped");
                    return;
                }
                systems::player::apply_look(&mut self.player, dx, dy);
                self.dilation.record_sample(Vec2::new(dx, dy).length(), timestamp_secs);
            }
            PlayerCommand::Dash => {
                if self.phase == GamePhase::Active
                    && systems::player::try_dash(&mut self.player, self.input.move_intent)
                {
                    self.events.push(GameEvent::DashStarted);
                    let start = self.time.real_elapsed_secs;
                    for i in 0..DASH_TRAIL_STEPS {
                        self.real_actions.schedule(
                            start + (i as f32 * DASH_TRAIL_INTERVAL_SECS) as f64,
                            ScheduledAction::DashTrail,
                        );
                    }
                }
            }
            PlayerCommand::SetFiring { held } => self.input.firing = held,
            PlayerCommand::SelectUpgrade { id } => self.select_upgrade(id),
        }
    }

    fn start_run(&mut self) {
        self.clear_run_state();
        self.phase = GamePhase::Active;
        self.events.push(GameEvent::RunStarted);
        log::info!("run started at wave {}", self.run.wave.number);
        wave_director::begin_wave(
            &mut self.run.wave,
            &mut self.world_actions,
            self.time.world_elapsed_secs,
            &mut self.events,
        );
    }

    fn reset(&mut self) {
        self.clear_run_state();
        self.input = PlayerInput::default();
        self.phase = GamePhase::Idle;
        log::info!("run reset");
    }

    fn clear_run_state(&mut self) {
        self.world.clear();
        self.player = Player::default();
        self.dilation.reset();
        self.last_step = DilationStep::frozen(self.dilation.scale());
        self.world_actions.clear();
        self.real_actions.clear();
        self.run = RunState::new(self.config.starting_wave);
        self.particles.clear();
        self.beams.clear();
        self.time = SimTime::default();
    }

    fn select_upgrade(&mut self, id: UpgradeId) {
        if self.phase != GamePhase::UpgradeSelection || !self.run.offer.contains(&id) {
            log::warn!("upgrade {id:?} is not on offer");
            return;
        }
        upgrades::apply(id, &mut self.player);
        self.run.acquired.push(id);
        self.run.offer.clear();
        self.events.push(GameEvent::UpgradeApplied { id });
        log::info!("upgrade {id:?} applied");

        self.phase = GamePhase::Active;
        // Intermission runs on the real clock so an idle pointer cannot stretch it
        self.real_actions.schedule(
            self.time.real_elapsed_secs + WAVE_INTERMISSION_SECS as f64,
            ScheduledAction::StartWave {
                wave: self.run.wave.number,
            },
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now_secs: f64, real_dt: f32) {
        let half_extent = self.config.arena_half_extent;

        // 1. Time dilation
        let step = self.dilation.update(
            now_secs,
            real_dt,
            self.player.combat.min_time_scale,
            self.player.combat.has_time_shield,
        );
        self.last_step = step;
        if step.shield_armed {
            self.player.time_shield_remaining_secs = TIME_SHIELD_DURATION_SECS;
            self.events.push(GameEvent::TimeShieldArmed);
        }
        let real_now = self.time.real_elapsed_secs + step.real_dt as f64;
        let world_now = self.time.world_elapsed_secs + step.dilated_dt as f64;

        // 2. Player (real time)
        let volley = systems::player::run(&mut self.player, &self.input, step.real_dt, half_extent);
        for shot in volley {
            self.spawn_bullet(Side::Player, shot);
        }

        // 3. Deferred actions, each against its own clock
        for action in self.real_actions.drain_due(real_now) {
            self.execute(action, world_now);
        }
        for action in self.world_actions.drain_due(world_now) {
            self.execute(action, world_now);
        }

        // 4. Enemy AI
        let attacks = systems::enemy_ai::run(
            &mut self.world,
            self.player.position,
            real_now,
            step.dilated_dt,
            half_extent,
            &mut self.rng,
        );
        for shot in attacks.volleys {
            self.spawn_bullet(Side::Enemy, shot);
        }
        for (enemy, steps) in attacks.bursts {
            for burst_step in steps {
                self.world_actions.schedule(
                    world_now + burst_step.delay_secs as f64,
                    ScheduledAction::BurstShot {
                        enemy,
                        behavior: burst_step.behavior,
                    },
                );
            }
        }
        for beam in attacks.beams {
            if beam.hit {
                systems::combat::damage_player(&mut self.player, SNIPER_BEAM_DAMAGE, &mut self.events);
            }
            self.beams.push(beam);
        }

        // 5. Bullets: motion, then clashes, player hits, enemy hits, expiry
        systems::bullets::advance(&mut self.world, self.player.position, step.dilated_dt, &mut self.events);

        for position in systems::bullets::resolve_clashes(&mut self.world, &mut self.despawn_buffer) {
            let bonus = self.run.award(BULLET_CLASH_BONUS, 1.0);
            self.events.push(GameEvent::BulletsClashed { position, bonus });
            self.particles.burst(position, 1.0, 8, 4.0);
        }

        for damage in
            systems::bullets::resolve_player_hits(&mut self.world, self.player.position, &mut self.despawn_buffer)
        {
            systems::combat::damage_player(&mut self.player, damage, &mut self.events);
        }

        let hits = systems::bullets::resolve_enemy_hits(&mut self.world, &mut self.despawn_buffer);
        for hit in &hits {
            self.particles.burst(hit.position, 1.0, 4, 3.0);
        }
        for hit in hits.iter().filter(|h| h.lethal) {
            systems::combat::destroy_enemy(
                &mut self.world,
                hit.enemy,
                &self.player,
                &mut self.run,
                &mut self.rng,
                &mut self.particles,
                &mut self.events,
            );
        }

        systems::bullets::expire(&mut self.world, half_extent, &mut self.despawn_buffer);

        // 6. Pickups
        systems::pickups::run(
            &mut self.world,
            &mut self.player,
            step.dilated_dt,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 7. Cosmetics
        self.particles.update(step.dilated_dt);
        systems::particles::update_beams(&mut self.beams, step.dilated_dt);

        self.time.advance(step.real_dt, step.dilated_dt);

        // 8. Terminal state takes priority over progression
        if self.player.health <= 0.0 {
            self.end_run();
            return;
        }
        if wave_director::check_clear(&self.world, &mut self.run.wave) {
            self.on_wave_cleared();
        }
    }

    fn execute(&mut self, action: ScheduledAction, world_now: f64) {
        match action {
            ScheduledAction::SpawnEnemy { wave } => {
                let id = self.run.next_id();
                let spawned = wave_director::release_spawn(
                    &mut self.world,
                    &mut self.rng,
                    &mut self.run.wave,
                    wave,
                    id,
                    self.player.position,
                    self.config.arena_half_extent,
                    &mut self.events,
                );
                if let Some((_, position)) = spawned {
                    self.particles.burst(position, 0.5, 10, 4.0);
                }
            }
            ScheduledAction::StartWave { wave } => {
                if wave == self.run.wave.number && self.run.wave.phase == WavePhase::Cleared {
                    wave_director::begin_wave(&mut self.run.wave, &mut self.world_actions, world_now, &mut self.events);
                }
            }
            ScheduledAction::BurstShot { enemy, behavior } => {
                // The firing enemy may have died since the burst started
                let Ok((firing, position)) = self.world.query_one_mut::<(&Enemy, &Position)>(enemy) else {
                    return;
                };
                let shot = aimed_shot(position.0, self.player.position, firing.bullet_speed, behavior);
                self.spawn_bullet(Side::Enemy, shot);
            }
            ScheduledAction::DashTrail => {
                self.particles.burst(self.player.position, 0.3, 6, 2.0);
            }
        }
    }

    fn spawn_bullet(&mut self, side: Side, shot: BulletSpawn) -> Entity {
        let (damage, piercing) = match side {
            Side::Player => (self.player.combat.damage, self.player.combat.piercing),
            Side::Enemy => (ENEMY_BULLET_DAMAGE, false),
        };
        let id = self.run.next_id();
        world_setup::spawn_bullet(
            &mut self.world,
            id,
            BulletSpec {
                side,
                origin: shot.origin,
                velocity: shot.velocity,
                behavior: shot.behavior,
                damage,
                piercing,
            },
        )
    }

    fn on_wave_cleared(&mut self) {
        let cleared = self.run.wave.number;
        let bonus = self.run.award(
            WAVE_CLEAR_BONUS_PER_WAVE * cleared as u64,
            self.player.combat.score_multiplier,
        );
        self.run.wave.number += 1;
        self.events.push(GameEvent::WaveCleared {
            new_wave: self.run.wave.number,
            bonus,
        });
        log::info!("wave {cleared} cleared, +{bonus}");

        let offer = upgrades::draw_offer(&self.run.acquired, &mut self.rng, UPGRADE_OFFER_SIZE);
        if offer.is_empty() {
            // Nothing left to offer: straight into the next wave
            wave_director::begin_wave(
                &mut self.run.wave,
                &mut self.world_actions,
                self.time.world_elapsed_secs,
                &mut self.events,
            );
            return;
        }

        let options = offer.iter().filter_map(|id| upgrades::offer_view(*id)).collect();
        self.run.offer = offer;
        self.phase = GamePhase::UpgradeSelection;
        self.events.push(GameEvent::UpgradeOffered { options });
    }

    fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.input = PlayerInput::default();
        self.events.push(GameEvent::GameOver {
            final_score: self.run.score,
        });
        log::info!(
            "game over at wave {} with score {}",
            self.run.wave.number,
            self.run.score
        );
    }
}
