#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use chronoshift_core::constants::*;
    use chronoshift_core::enums::{AttackPattern, BulletBehavior, EnemyArchetype, EnemyBehavior};

    use crate::beam::{hitscan, track_aim};
    use crate::fsm::{evaluate, select_behavior, smooth_velocity, wander, SteeringContext};
    use crate::patterns::{burst_steps, fire, ring, spread, PatternOutput};
    use crate::profiles::get_profile;

    fn make_context(archetype: EnemyArchetype, distance: f32) -> SteeringContext {
        // Enemy south of the player, at rest
        SteeringContext {
            archetype,
            enemy_id: 2,
            position: Vec2::new(0.0, -distance),
            velocity: Vec2::ZERO,
            player_position: Vec2::ZERO,
            speed: get_profile(archetype).speed,
            elapsed_secs: 0.0,
            dilated_dt: 1.0 / 60.0,
        }
    }

    // ---- Behaviour selection ----

    #[test]
    fn test_grunts_pursue_at_range() {
        for archetype in [EnemyArchetype::Basic, EnemyArchetype::Fast, EnemyArchetype::Heavy] {
            assert_eq!(
                select_behavior(archetype, STRAFE_RANGE + 5.0),
                EnemyBehavior::Pursue
            );
            assert_eq!(
                select_behavior(archetype, STRAFE_RANGE - 1.0),
                EnemyBehavior::Strafe
            );
        }
    }

    #[test]
    fn test_sniper_kites_beyond_melee_range() {
        for distance in [MELEE_RANGE + 1.0, 18.0, 25.0, ARENA_HALF_EXTENT * 2.0] {
            assert_eq!(
                select_behavior(EnemyArchetype::Sniper, distance),
                EnemyBehavior::Retreat,
                "distance {distance}"
            );
        }
        // Cornered inside melee range it circles instead of running
        assert_eq!(
            select_behavior(EnemyArchetype::Sniper, MELEE_RANGE - 1.0),
            EnemyBehavior::Strafe
        );
    }

    #[test]
    fn test_pursuit_accelerates_toward_player() {
        let ctx = make_context(EnemyArchetype::Basic, 20.0);
        let update = evaluate(&ctx);
        assert_eq!(update.behavior, EnemyBehavior::Pursue);
        // Player is north of the enemy
        assert!(update.velocity.y > 0.0, "velocity {:?}", update.velocity);
        // Smoothed: one tick does not reach full speed
        assert!(update.velocity.length() < ctx.speed);
        assert!(update.yaw.abs() < 1e-5, "should face north, got {}", update.yaw);
    }

    #[test]
    fn test_sniper_retreats_away_from_player() {
        let ctx = make_context(EnemyArchetype::Sniper, 10.0);
        let update = evaluate(&ctx);
        assert_eq!(update.behavior, EnemyBehavior::Retreat);
        assert!(update.velocity.y < 0.0);
        // Still faces the player while backing off
        assert!(update.yaw.abs() < 1e-5);
    }

    #[test]
    fn test_steering_on_top_of_player_is_finite() {
        let mut ctx = make_context(EnemyArchetype::Fast, 0.0);
        ctx.position = ctx.player_position;
        let update = evaluate(&ctx);
        assert!(update.velocity.is_finite());
        assert!(update.yaw.is_finite());
    }

    #[test]
    fn test_wander_is_deterministic_and_per_entity() {
        assert_eq!(wander(3.25, 7), wander(3.25, 7));
        assert_ne!(wander(3.25, 7), wander(3.25, 8));
        assert!(wander(1.0, 1).length() <= WANDER_STRENGTH * std::f32::consts::SQRT_2 + 1e-5);
    }

    #[test]
    fn test_smoothing_never_overshoots() {
        let target = Vec2::new(10.0, 0.0);
        let mut v = Vec2::ZERO;
        for _ in 0..200 {
            let next = smooth_velocity(v, target, 0.05);
            assert!(next.x >= v.x && next.x <= target.x);
            v = next;
        }
        assert!((v - target).length() < 1e-3);
        // Huge dt snaps exactly
        assert_eq!(smooth_velocity(Vec2::ZERO, target, 10.0), target);
    }

    // ---- Patterns ----

    #[test]
    fn test_spread_is_three_bullet_fan() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let bullets = spread(Vec2::ZERO, Vec2::Y, 12.0, &mut rng);
        assert_eq!(bullets.len(), 3);
        for b in &bullets {
            assert!((b.velocity.length() - 12.0).abs() < 1e-4);
        }
        // Outer bullets are mirror images about the aim axis
        assert!((bullets[0].velocity.x + bullets[2].velocity.x).abs() < 1e-4);
        assert_eq!(bullets[0].behavior, BulletBehavior::Standard);
        assert_eq!(bullets[2].behavior, BulletBehavior::Standard);
    }

    #[test]
    fn test_spread_centre_sometimes_homes() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let homing = (0..200)
            .filter(|_| {
                spread(Vec2::ZERO, Vec2::Y, 10.0, &mut rng)[1].behavior
                    == BulletBehavior::GentleHoming
            })
            .count();
        assert!(homing > 20 && homing < 120, "homing centre count {homing}");
    }

    #[test]
    fn test_burst_schedule() {
        let steps = burst_steps();
        assert_eq!(steps.len(), BURST_SHOTS as usize);
        assert_eq!(steps[0].delay_secs, 0.0);
        for pair in steps.windows(2) {
            assert!(pair[1].delay_secs > pair[0].delay_secs);
        }
        let (last, rest) = steps.split_last().unwrap();
        assert_eq!(last.behavior, BulletBehavior::DelayedHoming);
        assert!(rest.iter().all(|s| s.behavior == BulletBehavior::Standard));
    }

    #[test]
    fn test_ring_layout() {
        let bullets = ring(Vec2::ZERO, Vec2::X, 9.0);
        assert_eq!(bullets.len(), RING_BULLETS as usize + 1);
        let radial: Vec2 = bullets[..RING_BULLETS as usize]
            .iter()
            .map(|b| b.velocity)
            .sum();
        assert!(radial.length() < 1e-3, "ring should be balanced, sum {radial:?}");
        let homer = bullets.last().unwrap();
        assert_eq!(homer.behavior, BulletBehavior::AggressiveHoming);
        assert!(homer.velocity.normalize().dot(Vec2::X) > 0.999);
    }

    #[test]
    fn test_beam_pattern_requests_telegraph() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let out = fire(
            AttackPattern::Beam,
            Vec2::ZERO,
            Vec2::new(0.0, 10.0),
            0.0,
            &mut rng,
        );
        match out {
            PatternOutput::Telegraph { aim } => assert!((aim - Vec2::Y).length() < 1e-6),
            other => panic!("expected telegraph, got {other:?}"),
        }
    }

    // ---- Beam ----

    #[test]
    fn test_hitscan_geometry() {
        let origin = Vec2::ZERO;
        let aim = Vec2::Y;
        assert!(hitscan(origin, aim, Vec2::new(0.5, 20.0), SNIPER_HIT_RADIUS));
        assert!(!hitscan(origin, aim, Vec2::new(2.0, 20.0), SNIPER_HIT_RADIUS));
        // Behind the sniper
        assert!(!hitscan(origin, aim, Vec2::new(0.0, -5.0), SNIPER_HIT_RADIUS));
    }

    #[test]
    fn test_track_aim_turns_gradually() {
        let aim = track_aim(Vec2::Y, Vec2::ZERO, Vec2::new(10.0, 0.0), 0.05);
        assert!((aim.length() - 1.0).abs() < 1e-5);
        assert!(aim.x > 0.0 && aim.y > 0.0, "partially turned, got {aim:?}");
        // Target on the origin keeps the old aim
        assert_eq!(track_aim(Vec2::Y, Vec2::ZERO, Vec2::ZERO, 0.05), Vec2::Y);
    }
}
