use std::process::ExitCode;
use std::time::{Duration, Instant};

use thiserror::Error;

use chronoshift_app::autopilot::Autopilot;
use chronoshift_app::control::{self, ControlError};
use chronoshift_app::core::enums::GamePhase;
use chronoshift_app::core::events::GameEvent;
use chronoshift_app::state::AppState;
use chronoshift_sim::{ConfigError, SimConfig};

/// Default length of an autopilot session.
const DEFAULT_RUN_SECS: f64 = 30.0;
/// How often the autopilot looks at the latest snapshot.
const POLL_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid duration {0:?}")]
    Duration(String),
    #[error(transparent)]
    Control(#[from] ControlError),
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `chronoshift [config.json] [seconds]`
fn run() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|source| AppError::ReadConfig { path, source })?;
            SimConfig::from_json_str(&text)?
        }
        None => SimConfig::default(),
    };
    let run_secs = match args.next() {
        Some(arg) => arg
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s > 0.0)
            .ok_or(AppError::Duration(arg))?,
        None => DEFAULT_RUN_SECS,
    };

    log::info!(
        "starting autopilot session: seed {}, {run_secs}s",
        config.seed
    );

    let state = AppState::new();
    control::start_simulation(&state, config, Box::new(log_events))?;

    let mut pilot = Autopilot::new();
    let start = Instant::now();
    let mut last_phase = GamePhase::Idle;
    while start.elapsed().as_secs_f64() < run_secs {
        let snapshot = control::get_snapshot(&state)?;
        if let Some(snap) = snapshot.as_ref() {
            last_phase = snap.phase;
            if snap.phase == GamePhase::GameOver {
                break;
            }
        }
        for command in pilot.next_commands(start.elapsed().as_secs_f64(), snapshot.as_ref()) {
            control::send_command(&state, command)?;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    control::stop_simulation(&state)?;

    if let Some(snap) = control::get_snapshot(&state)? {
        log::info!(
            "session over ({:?}): wave {}, score {}, kills {}, upgrades {:?}",
            last_phase,
            snap.wave,
            snap.score,
            snap.kills,
            snap.acquired_upgrades
        );
    }
    Ok(())
}

fn log_events(snapshot: &chronoshift_app::core::state::GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::WaveStarted { .. }
            | GameEvent::WaveCleared { .. }
            | GameEvent::UpgradeApplied { .. }
            | GameEvent::GameOver { .. } => log::info!("{event:?}"),
            _ => log::debug!("{event:?}"),
        }
    }
}
