#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::components::{CombatParams, Player};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{GameStateSnapshot, UpgradeOfferView};
    use crate::types::{heading_of, heading_vector, rotate_clockwise, SimTime};

    /// Upgrade ids travel as snake_case strings (the input layer sends them back).
    #[test]
    fn test_upgrade_id_wire_format() {
        let json = serde_json::to_string(&UpgradeId::TemporalMastery).unwrap();
        assert_eq!(json, "\"temporal_mastery\"");
        let back: UpgradeId = serde_json::from_str("\"shotgun\"").unwrap();
        assert_eq!(back, UpgradeId::Shotgun);
    }

    /// PlayerCommand is a tagged union keyed on "type".
    #[test]
    fn test_player_command_tagged() {
        let cmd = PlayerCommand::SelectUpgrade {
            id: UpgradeId::QuickDash,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SelectUpgrade\""), "got {json}");

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"Look","dx":3.0,"dy":-4.0,"timestamp_secs":1.5}"#)
                .unwrap();
        match parsed {
            PlayerCommand::Look {
                dx,
                dy,
                timestamp_secs,
            } => {
                assert_eq!(dx, 3.0);
                assert_eq!(dy, -4.0);
                assert_eq!(timestamp_secs, 1.5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::WaveCleared {
                new_wave: 3,
                bonus: 500,
            },
            GameEvent::PlayerDamaged {
                amount: 25.0,
                remaining: 75.0,
            },
            GameEvent::UpgradeOffered {
                options: vec![UpgradeOfferView {
                    id: UpgradeId::Shotgun,
                    name: "Shotgun".into(),
                    description: "Seven pellets".into(),
                    category: UpgradeCategory::Weapon,
                }],
            },
            GameEvent::GameOver { final_score: 1234 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_player_defaults() {
        let player = Player::default();
        assert_eq!(player.health, PLAYER_MAX_HEALTH);
        assert!(player.dash.can_dash);
        assert_eq!(player.dash.cooldown_max_secs, DASH_COOLDOWN_SECS);
        assert_eq!(player.combat, CombatParams::default());
        assert_eq!(player.combat.bullet_count, 1);
        assert_eq!(player.combat.min_time_scale, DEFAULT_MIN_TIME_SCALE);
    }

    #[test]
    fn test_heading_conventions() {
        // 0 = North (+y), PI/2 = East (+x)
        let north = heading_vector(0.0);
        assert!((north - Vec2::Y).length() < 1e-6);
        let east = heading_vector(std::f32::consts::FRAC_PI_2);
        assert!((east - Vec2::X).length() < 1e-6);
        assert!((heading_of(Vec2::X) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_clockwise_matches_heading() {
        let rotated = rotate_clockwise(heading_vector(0.3), 0.5);
        assert!((rotated - heading_vector(0.8)).length() < 1e-5);
    }

    /// Verify SimTime tracks the two timing domains separately.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..10 {
            time.advance(0.1, 0.01);
        }
        assert_eq!(time.tick, 10);
        assert!((time.real_elapsed_secs - 1.0).abs() < 1e-5);
        assert!((time.world_elapsed_secs - 0.1).abs() < 1e-5);
    }
}
