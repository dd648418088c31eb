//! Control surface over a running simulation.
//!
//! Bridges callers to the game loop thread via channels. Every operation
//! reports failure as a `ControlError` rather than panicking.

use thiserror::Error;

use chronoshift_core::commands::PlayerCommand;
use chronoshift_core::state::GameStateSnapshot;
use chronoshift_sim::SimConfig;

use crate::game_loop::{self, SnapshotSink};
use crate::state::{AppState, GameLoopCommand};

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop is gone: {0}")]
    Disconnected(String),
    #[error("shared state poisoned: {0}")]
    Poisoned(String),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> ControlError {
    ControlError::Poisoned(e.to_string())
}

/// Spawn the game loop thread if it is not already running.
pub fn start_simulation(state: &AppState, config: SimConfig, sink: SnapshotSink) -> Result<(), ControlError> {
    let mut running = state.running.lock().map_err(poisoned)?;
    if *running {
        return Err(ControlError::AlreadyRunning);
    }

    let cmd_tx = game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), sink)?;

    *state.command_tx.lock().map_err(poisoned)? = Some(cmd_tx);
    *running = true;
    Ok(())
}

/// Forward a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), ControlError> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Ask the game loop to exit. The loop finishes its current tick first.
pub fn stop_simulation(state: &AppState) -> Result<(), ControlError> {
    send(state, GameLoopCommand::Shutdown)?;
    *state.command_tx.lock().map_err(poisoned)? = None;
    *state.running.lock().map_err(poisoned)? = false;
    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), ControlError> {
    let tx_lock = state.command_tx.lock().map_err(poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(command)
            .map_err(|e| ControlError::Disconnected(e.to_string())),
        None => Err(ControlError::NotStarted),
    }
}

/// The latest snapshot, for polling.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, ControlError> {
    let lock = state.latest_snapshot.lock().map_err(poisoned)?;
    Ok(lock.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::StartRun),
            Err(ControlError::NotStarted)
        ));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_twice_fails_and_stop_resets() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default(), Box::new(|_| {})).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default(), Box::new(|_| {})),
            Err(ControlError::AlreadyRunning)
        ));
        send_command(&state, PlayerCommand::StartRun).unwrap();
        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            send_command(&state, PlayerCommand::Pause),
            Err(ControlError::NotStarted)
        ));
    }
}
