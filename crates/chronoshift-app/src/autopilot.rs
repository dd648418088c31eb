//! Scripted player for headless runs.
//!
//! Reads the latest snapshot and produces the commands a human would send:
//! start a run, hold the trigger, circle strafe, sweep the view, dash on a
//! fixed cadence and take the first upgrade on offer.

use chronoshift_core::commands::PlayerCommand;
use chronoshift_core::enums::GamePhase;
use chronoshift_core::state::GameStateSnapshot;

/// Seconds between dash attempts.
const DASH_INTERVAL_SECS: f64 = 3.0;
/// Angular rate of the strafing circle, radians per second.
const ORBIT_RATE: f64 = 0.7;
/// Peak horizontal pointer motion per command.
const LOOK_SWEEP_DX: f64 = 12.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    start_requested: bool,
    firing: bool,
    last_dash_secs: Option<f64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to send at `elapsed_secs`, given the most recent snapshot.
    pub fn next_commands(
        &mut self,
        elapsed_secs: f64,
        snapshot: Option<&GameStateSnapshot>,
    ) -> Vec<PlayerCommand> {
        let phase = snapshot.map(|s| s.phase).unwrap_or_default();
        match phase {
            GamePhase::Idle => {
                if self.start_requested {
                    return Vec::new();
                }
                self.start_requested = true;
                vec![PlayerCommand::StartRun]
            }
            GamePhase::Active => self.fight(elapsed_secs),
            GamePhase::UpgradeSelection => snapshot
                .and_then(|s| s.upgrade_offer.first())
                .map(|offer| vec![PlayerCommand::SelectUpgrade { id: offer.id }])
                .unwrap_or_default(),
            GamePhase::Paused => vec![PlayerCommand::Resume],
            GamePhase::GameOver => Vec::new(),
        }
    }

    fn fight(&mut self, elapsed_secs: f64) -> Vec<PlayerCommand> {
        let mut commands = Vec::with_capacity(4);

        if !self.firing {
            self.firing = true;
            commands.push(PlayerCommand::SetFiring { held: true });
        }

        let phase = elapsed_secs * ORBIT_RATE;
        commands.push(PlayerCommand::SetMoveIntent {
            x: phase.cos() as f32,
            y: phase.sin() as f32,
        });

        // Slow sweeps keep the world dilated, fast ones bring it back up to speed
        let sweep = (elapsed_secs * 0.5).sin() * LOOK_SWEEP_DX;
        commands.push(PlayerCommand::Look {
            dx: sweep as f32,
            dy: 0.0,
            timestamp_secs: elapsed_secs,
        });

        let dash_due = self
            .last_dash_secs
            .map_or(true, |last| elapsed_secs - last >= DASH_INTERVAL_SECS);
        if dash_due {
            self.last_dash_secs = Some(elapsed_secs);
            commands.push(PlayerCommand::Dash);
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronoshift_core::enums::{UpgradeCategory, UpgradeId};
    use chronoshift_core::state::UpgradeOfferView;

    fn snapshot_in(phase: GamePhase) -> GameStateSnapshot {
        GameStateSnapshot {
            phase,
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_run_once() {
        let mut pilot = Autopilot::new();
        let first = pilot.next_commands(0.0, None);
        assert!(matches!(first.as_slice(), [PlayerCommand::StartRun]));

        let idle = snapshot_in(GamePhase::Idle);
        assert!(pilot.next_commands(0.1, Some(&idle)).is_empty());
    }

    #[test]
    fn test_active_fires_moves_and_dashes_on_cadence() {
        let mut pilot = Autopilot::new();
        let active = snapshot_in(GamePhase::Active);

        let first = pilot.next_commands(1.0, Some(&active));
        assert!(first
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetFiring { held: true })));
        assert!(first.iter().any(|c| matches!(c, PlayerCommand::Dash)));
        assert!(first
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetMoveIntent { .. })));

        // Trigger stays held, no dash before the interval elapses
        let second = pilot.next_commands(2.0, Some(&active));
        assert!(!second
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetFiring { .. } | PlayerCommand::Dash)));

        let third = pilot.next_commands(4.0, Some(&active));
        assert!(third.iter().any(|c| matches!(c, PlayerCommand::Dash)));
    }

    #[test]
    fn test_picks_first_offered_upgrade() {
        let mut pilot = Autopilot::new();
        let mut snap = snapshot_in(GamePhase::UpgradeSelection);
        snap.upgrade_offer = vec![
            UpgradeOfferView {
                id: UpgradeId::Magnetism,
                name: "Magnetism".into(),
                description: String::new(),
                category: UpgradeCategory::Utility,
            },
            UpgradeOfferView {
                id: UpgradeId::RapidFire,
                name: "Rapid Fire".into(),
                description: String::new(),
                category: UpgradeCategory::Weapon,
            },
        ];

        let commands = pilot.next_commands(10.0, Some(&snap));
        assert!(matches!(
            commands.as_slice(),
            [PlayerCommand::SelectUpgrade {
                id: UpgradeId::Magnetism
            }]
        ));
    }

    #[test]
    fn test_game_over_is_quiet() {
        let mut pilot = Autopilot::new();
        let over = snapshot_in(GamePhase::GameOver);
        assert!(pilot.next_commands(5.0, Some(&over)).is_empty());
    }
}
