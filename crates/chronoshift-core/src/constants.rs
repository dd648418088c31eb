//! Simulation constants and tuning parameters.
//!
//! Distances are arena units on the ground plane, times are seconds.

// --- Frame timing ---

/// Largest real delta accepted per tick. Longer frames are clamped to this.
pub const MAX_REAL_DT: f32 = 0.1;

// --- Arena ---

/// Default half-width of the square arena (arena spans `-H..=H` on both axes).
pub const ARENA_HALF_EXTENT: f32 = 30.0;

/// Inset from the arena edge at which enemies spawn.
pub const SPAWN_EDGE_INSET: f32 = 2.0;

/// Minimum distance between a fresh spawn and the player.
pub const SPAWN_MIN_PLAYER_DISTANCE: f32 = 10.0;

/// Resample attempts before a spawn position is accepted regardless of distance.
pub const SPAWN_MAX_ATTEMPTS: u32 = 16;

// --- Time dilation ---

/// Pointer samples older than this window are dropped before averaging.
pub const POINTER_SAMPLE_WINDOW_SECS: f64 = 0.1;

/// Average pointer speed at or below which time runs at the floor scale.
pub const POINTER_SPEED_MIN: f32 = 1.0;

/// Average pointer speed at or above which time runs at full speed.
pub const POINTER_SPEED_MAX: f32 = 20.0;

/// Default floor of the time scale.
pub const DEFAULT_MIN_TIME_SCALE: f32 = 0.1;

/// Exponential smoothing rate for the active time scale (per real second).
pub const TIME_SCALE_SMOOTHING_RATE: f32 = 10.0;

/// Crossing down through this scale arms the time shield (if owned).
pub const TIME_SHIELD_THRESHOLD: f32 = 0.3;

/// Length of the time-shield invulnerability window (real seconds).
pub const TIME_SHIELD_DURATION_SECS: f32 = 0.2;

// --- Player ---

pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Ground speed while an intent is held.
pub const PLAYER_MOVE_SPEED: f32 = 10.0;

/// Velocity multiplier applied each tick when no intent is held.
pub const PLAYER_VELOCITY_DAMPING: f32 = 0.9;

/// Gap kept between the player and the arena wall.
pub const PLAYER_WALL_MARGIN: f32 = 1.0;

pub const PLAYER_HIT_RADIUS: f32 = 0.8;

/// Radians of yaw/pitch per unit of pointer delta.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch is clamped to +/- this value.
pub const MAX_PITCH: f32 = 1.55;

pub const DASH_SPEED: f32 = 40.0;
pub const DASH_DURATION_SECS: f32 = 0.15;
pub const DASH_COOLDOWN_SECS: f32 = 2.0;

/// Number of trail bursts emitted over the course of one dash.
pub const DASH_TRAIL_STEPS: u32 = 5;

/// Real-time spacing between dash trail bursts.
pub const DASH_TRAIL_INTERVAL_SECS: f32 = 0.03;

// --- Player weapon defaults ---

pub const PLAYER_BULLET_DAMAGE: f32 = 25.0;
pub const PLAYER_FIRE_INTERVAL_SECS: f32 = 0.2;
pub const PLAYER_BULLET_SPEED: f32 = 40.0;
pub const PLAYER_BULLET_LIFETIME_SECS: f32 = 2.0;

/// Default angle between adjacent bullets of one volley.
pub const PLAYER_BULLET_SPREAD: f32 = 0.1;

pub const DEFAULT_PICKUP_RANGE: f32 = 1.5;

// --- Bullets ---

pub const ENEMY_BULLET_LIFETIME_SECS: f32 = 6.0;

/// Distance at which a player bullet touches an enemy (added to enemy radius).
pub const BULLET_RADIUS: f32 = 0.3;

/// Radius for destructible-bullet vs opposing-bullet annihilation.
pub const BULLET_CLASH_RADIUS: f32 = 0.6;

/// Score awarded when a destructible bullet is shot down.
pub const BULLET_CLASH_BONUS: u64 = 25;

/// Homing bullets only consider targets inside this radius.
pub const HOMING_SEARCH_RADIUS: f32 = 20.0;

pub const GENTLE_HOMING_STRENGTH: f32 = 1.0;
pub const AGGRESSIVE_HOMING_STRENGTH: f32 = 3.0;
pub const DELAYED_HOMING_STRENGTH: f32 = 2.5;
pub const SEEKER_HOMING_STRENGTH: f32 = 4.0;

/// Dilated seconds before a delayed-homing bullet starts steering.
pub const DELAYED_HOMING_ACTIVATION_SECS: f32 = 0.8;

/// Maximum trail positions kept per bullet (newest first).
pub const BULLET_TRAIL_LENGTH: usize = 6;

// --- Enemy AI ---

/// Below this distance a sniper gives up kiting and strafes.
pub const MELEE_RANGE: f32 = 3.0;

/// Non-snipers pursue beyond this distance and strafe inside it.
pub const STRAFE_RANGE: f32 = 7.0;

/// Weight of the deterministic wander term added to every steering direction.
pub const WANDER_STRENGTH: f32 = 0.3;

/// Exponential steering rate toward the desired velocity (per dilated second).
pub const ENEMY_STEERING_RATE: f32 = 3.0;

/// Upper bound of the random jitter added to every shoot-timer reset.
pub const SHOOT_JITTER_SECS: f32 = 0.5;

/// Angle between the bullets of a spread volley.
pub const SPREAD_ANGLE: f32 = 0.2;

/// Chance that the centre bullet of a spread volley gently homes.
pub const SPREAD_HOMING_CHANCE: f64 = 0.3;

pub const BURST_SHOTS: u32 = 5;

/// Dilated seconds between burst shots.
pub const BURST_INTERVAL_SECS: f32 = 0.1;

pub const RING_BULLETS: u32 = 6;

/// Duration of the sniper telegraph (dilated seconds).
pub const TELEGRAPH_DURATION_SECS: f32 = 0.5;

/// How fast a telegraphing sniper re-aims at the player (per dilated second).
pub const TELEGRAPH_TRACK_RATE: f32 = 4.0;

/// Perpendicular distance from the beam within which the player is hit.
pub const SNIPER_HIT_RADIUS: f32 = 1.0;

pub const SNIPER_BEAM_DAMAGE: f32 = 20.0;

/// Visual beam length.
pub const SNIPER_BEAM_LENGTH: f32 = 60.0;

/// Lifetime of a resolved beam visual (dilated seconds).
pub const SNIPER_BEAM_LIFE_SECS: f32 = 0.2;

pub const ENEMY_BULLET_DAMAGE: f32 = 10.0;

// --- Pickups ---

/// Chance that a destroyed enemy drops a health pickup.
pub const HEALTH_PICKUP_CHANCE: f64 = 0.3;

pub const HEALTH_PICKUP_AMOUNT: f32 = 25.0;
pub const PICKUP_LIFETIME_SECS: f32 = 10.0;
pub const PICKUP_BOB_AMPLITUDE: f32 = 0.2;
pub const PICKUP_BOB_FREQUENCY: f32 = 3.0;

// --- Particles ---

pub const MAX_PARTICLES: usize = 150;

/// Downward acceleration applied to particles.
pub const PARTICLE_GRAVITY: f32 = 9.8;

// --- Waves ---

pub const WAVE_BASE_ENEMIES: u32 = 3;
pub const WAVE_ENEMIES_PER_LEVEL: u32 = 2;

/// Dilated seconds between staggered spawns of one wave.
pub const WAVE_SPAWN_STAGGER_SECS: f32 = 0.6;

/// Dilated seconds between an upgrade choice and the next wave.
pub const WAVE_INTERMISSION_SECS: f32 = 2.0;

/// Completion bonus per cleared wave number.
pub const WAVE_CLEAR_BONUS_PER_WAVE: u64 = 250;

pub const FAST_UNLOCK_WAVE: u32 = 2;
pub const HEAVY_UNLOCK_WAVE: u32 = 3;
pub const SNIPER_UNLOCK_WAVE: u32 = 5;

// --- Upgrades ---

/// Upgrades presented per offer.
pub const UPGRADE_OFFER_SIZE: usize = 3;
