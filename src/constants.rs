//! Gameplay constants.
//!
//! Values that [`crate::config::GameConfig`] can override are the compiled
//! defaults for that struct; the rest (canvas size, tick rate, entity
//! dimensions) are fixed.

// ── Canvas & clock ────────────────────────────────────────────────────────────

/// Logical canvas width. All positions live in this space.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Logical canvas height.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Simulation steps per second.
pub const TICKS_PER_SECOND: u32 = 60;

// ── Ship ──────────────────────────────────────────────────────────────────────

pub const SHIP_WIDTH: f32 = 50.0;
pub const SHIP_HEIGHT: f32 = 50.0;
/// Distance the ship's top edge sits above the canvas bottom at spawn.
pub const SHIP_START_OFFSET_Y: f32 = 80.0;
pub const SHIP_BASE_SPEED: f32 = 5.0;
/// Minimum ticks between two shots while fire is held.
pub const SHOOT_COOLDOWN: u32 = 10;

// ── Power-ups ─────────────────────────────────────────────────────────────────

/// Multiplier applied to the base speed while speed boost is active.
pub const SPEED_BOOST_FACTOR: f32 = 1.5;
pub const TRIPLE_SHOT_TICKS: u32 = 600;
pub const SPEED_BOOST_TICKS: u32 = 600;
pub const SHIELD_TICKS: u32 = 900;

pub const POWER_UP_SIZE: f32 = 30.0;
pub const POWER_UP_SPEED: f32 = 2.0;
pub const POWER_UP_SPIN: f32 = 0.05;
pub const POWER_UP_PULSE_STEP: f32 = 0.1;
/// Flat score bonus for collecting any power-up.
pub const POWER_UP_SCORE: u32 = 100;

/// Drop odds per enemy kill. Each is the width of its slice of one uniform
/// roll, stacked in this order; whatever is left over drops nothing.
pub const TRIPLE_SHOT_CHANCE: f64 = 0.05;
pub const SPEED_BOOST_CHANCE: f64 = 0.05;
pub const SHIELD_CHANCE: f64 = 0.03;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 8.0;
pub const BULLET_HEIGHT: f32 = 15.0;
pub const BULLET_SPEED: f32 = 10.0;
/// Side-shot velocity for triple shot: (±3, -8).
pub const SPREAD_VX: f32 = 3.0;
pub const SPREAD_VY: f32 = 8.0;
pub const BULLET_TRAIL_LEN: usize = 5;

// ── Enemies ───────────────────────────────────────────────────────────────────

/// Horizontal margin kept clear on both sides when picking a spawn x.
pub const ENEMY_SPAWN_MARGIN: f32 = 50.0;
pub const ENEMY_SPAWN_Y: f32 = -50.0;
/// Enemies that slip past the ship are dropped this far below the canvas.
pub const ENEMY_EXIT_MARGIN: f32 = 50.0;
/// Catch-all cleanup line, applied after collisions.
pub const ENEMY_CLEANUP_MARGIN: f32 = 100.0;
pub const FAST_WOBBLE_STEP: f32 = 0.1;
pub const FAST_WOBBLE_AMPLITUDE: f32 = 30.0;

// ── Director ──────────────────────────────────────────────────────────────────

pub const INITIAL_SPAWN_INTERVAL: u32 = 120;
pub const MIN_SPAWN_INTERVAL: u32 = 30;
pub const SPAWN_INTERVAL_STEP: u32 = 10;
/// Ticks between difficulty ramps (30 s).
pub const DIFFICULTY_INTERVAL: u32 = 1800;
/// Live enemies gain the smaller of these two increases on every ramp.
pub const RAMP_SPEED_FACTOR: f32 = 1.05;
pub const RAMP_SPEED_BONUS: f32 = 0.5;

/// After this many ticks fast enemies join the mix.
pub const FAST_PHASE_TICKS: u64 = 1800;
/// After this many ticks heavy enemies join the mix.
pub const HEAVY_PHASE_TICKS: u64 = 3600;
pub const MID_FAST_CHANCE: f64 = 0.30;
pub const LATE_HEAVY_CHANCE: f64 = 0.10;
pub const LATE_FAST_CHANCE: f64 = 0.30;

// ── Effects ───────────────────────────────────────────────────────────────────

pub const PARTICLE_DRAG: f32 = 0.98;
pub const EXPLOSION_PARTICLES: usize = 10;
pub const EXPLOSION_SPREAD: f32 = 5.0;
pub const EXPLOSION_LIFE: u32 = 60;
pub const SHIELD_BREAK_PARTICLES: usize = 15;
pub const HIT_PARTICLES: usize = 5;
pub const HIT_SPREAD: f32 = 3.0;
pub const HIT_LIFE: u32 = 30;
pub const SPARKLE_PARTICLES: usize = 15;
pub const SPARKLE_SPREAD: f32 = 4.0;
pub const SPARKLE_LIFE: u32 = 45;

pub const STAR_COUNT: usize = 100;
