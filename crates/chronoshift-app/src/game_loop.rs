//! Game loop thread: ticks the simulation engine at 60Hz against the wall clock.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots go to the sink and are stored
//! in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chronoshift_core::state::GameStateSnapshot;
use chronoshift_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Frames per second the loop aims for. The engine measures real deltas
/// itself, so a late frame only means a larger (capped) step.
pub const TICK_RATE: u32 = 60;

/// Nominal duration of one frame.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Receives every snapshot on the game loop thread.
pub type SnapshotSink = Box<dyn FnMut(&GameStateSnapshot) + Send + 'static>;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control surface to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    sink: SnapshotSink,
) -> std::io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("chronoshift-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, sink);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut sink: SnapshotSink,
) {
    let mut engine = SimulationEngine::new(config);
    let clock = Instant::now();
    let mut next_tick_time = clock;
    log::info!("game loop started at {TICK_RATE}Hz");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            log::info!("game loop stopped after {} ticks", engine.time().tick);
            return;
        }

        // 2. Advance to the current wall-clock time
        let snapshot = engine.tick(clock.elapsed().as_secs_f64());

        // 3. Hand the snapshot to the consumer
        sink(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset rather than spiral
            next_tick_time = now;
        }
    }
}

/// Forward queued commands to the engine. Returns false when the loop should exit.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, engine: &mut SimulationEngine) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronoshift_core::commands::PlayerCommand;
    use chronoshift_core::enums::GamePhase;

    #[test]
    fn test_drain_stops_on_shutdown() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let mut engine = SimulationEngine::new(SimConfig::default());

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();
        assert!(drain_commands(&rx, &mut engine));
        assert_eq!(engine.tick(0.0).phase, GamePhase::Active);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&rx, &mut engine));

        drop(tx);
        assert!(!drain_commands(&rx, &mut engine));
    }

    #[test]
    fn test_populated_snapshot_serializes() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartRun);
        engine.queue_command(PlayerCommand::SetFiring { held: true });

        // Run enough frames to populate entities
        for i in 0..120 {
            engine.tick(i as f64 / 60.0);
        }

        let snapshot = engine.tick(2.0);
        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], serde_json::to_value(GamePhase::Active).unwrap());
        assert!(json["enemies"].is_array());
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let (seen_tx, seen_rx) = mpsc::channel::<u64>();
        let tx = spawn_game_loop(
            SimConfig::default(),
            latest.clone(),
            Box::new(move |snap| {
                let _ = seen_tx.send(snap.time.tick);
            }),
        )
        .unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();
        // Wait for a few frames
        for _ in 0..5 {
            seen_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        }
        tx.send(GameLoopCommand::Shutdown).unwrap();

        assert!(latest.lock().unwrap().is_some());
    }

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
