//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No run in progress.
    #[default]
    Idle,
    Active,
    Paused,
    /// A wave was cleared and an upgrade offer is waiting for a choice.
    /// The world is frozen until one is selected.
    UpgradeSelection,
    /// Player health reached zero.
    GameOver,
}

/// Which side fired a bullet. Determines its legal collision targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// Enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Baseline grunt, fires spread volleys.
    Basic,
    /// Quick and fragile, fires staggered bursts.
    Fast,
    /// Slow and tough, fires radial rings.
    Heavy,
    /// Keeps its distance and fires telegraphed beams.
    Sniper,
}

/// Attack pattern an enemy fires when its shoot timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPattern {
    /// Three-bullet fan.
    Spread,
    /// Five staggered bullets, the last one delayed-homing.
    Burst,
    /// Six radial bullets plus one aggressive homer.
    Ring,
    /// Telegraph followed by a hitscan beam.
    Beam,
}

/// Movement policy selected by the enemy steering state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyBehavior {
    #[default]
    Pursue,
    /// Moving away from the player (sniper kiting).
    Retreat,
    /// Circling perpendicular to the player direction.
    Strafe,
    /// Locked in place while a beam is telegraphed.
    Telegraph,
}

/// Flight behaviour of a bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletBehavior {
    #[default]
    Standard,
    GentleHoming,
    /// Strong homing; can be shot down by opposing bullets.
    AggressiveHoming,
    /// Ballistic at first, homes after a fixed delay.
    DelayedHoming,
    /// Player seeker round.
    Seeker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeCategory {
    Weapon,
    Defensive,
    Utility,
}

/// Identifier of an entry in the upgrade catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeId {
    RapidFire,
    HeavyRounds,
    Shotgun,
    PiercingRounds,
    SeekerRounds,
    Vitality,
    TimeShield,
    QuickDash,
    TemporalMastery,
    BountyHunter,
    Magnetism,
}
