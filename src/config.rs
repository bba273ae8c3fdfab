//! Simulation tuning constants.
//!
//! Distances are logical pixels, durations are ticks (1/60 s).

// ── Arena ─────────────────────────────────────────────────────────────────────

/// Default (windowed) arena width.
pub const ARENA_WIDTH: f32 = 1000.0;
/// Default (windowed) arena height.
pub const ARENA_HEIGHT: f32 = 700.0;
/// Smallest arena accepted by `Arena::new`; keeps the spawn margins valid.
pub const MIN_ARENA_SIDE: f32 = 200.0;
/// Simulation rate.
pub const TICKS_PER_SECOND: u32 = 60;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 75.0;
pub const PLAYER_START_SPEED: f32 = 5.0;
pub const PLAYER_MAX_SPEED: f32 = 8.0;
pub const PLAYER_START_LIVES: u32 = 3;
/// Horizontal distance of each player's spawn point from the arena centre.
pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;
/// Length of the invulnerability window after a hit (2 s).
pub const INVULNERABLE_TICKS: u32 = 120;
/// Half-cycle of the invulnerability flicker.
pub const FLICKER_HALF_CYCLE: u32 = 5;

// ── Enemy ─────────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: f32 = 25.0;
pub const ENEMY_MIN_SPEED: f32 = 1.0;
pub const ENEMY_MAX_SPEED: f32 = 3.0;
pub const ENEMY_MIN_WANDER_TICKS: u32 = 60;
pub const ENEMY_MAX_WANDER_TICKS: u32 = 180;
/// How far outside the arena edge a new enemy appears.
pub const ENEMY_EDGE_OFFSET: f32 = 25.0;

// ── Power-up ──────────────────────────────────────────────────────────────────

/// Carried on every power-up; effects are instantaneous so nothing reads it.
pub const POWER_UP_DURATION: u32 = 300;

// ── Spawning ──────────────────────────────────────────────────────────────────

pub const SPAWN_MARGIN: f32 = 50.0;
pub const INITIAL_RESOURCES: usize = 15;
pub const INITIAL_ENEMIES: usize = 3;

pub const RESOURCE_CAP: usize = 10;
pub const RESOURCE_SPAWN_CHANCE: f64 = 0.02;
/// Enemy cap is this plus the current level.
pub const ENEMY_BASE_CAP: usize = 2;
pub const ENEMY_SPAWN_CHANCE: f64 = 0.01;
pub const POWER_UP_CAP: usize = 2;
pub const POWER_UP_SPAWN_CHANCE: f64 = 0.005;

/// Score needed per level before the next level-up.
pub const POINTS_PER_LEVEL: u32 = 50;
pub const LEVEL_UP_ENEMIES: usize = 2;

// ── Display ───────────────────────────────────────────────────────────────────

/// Logical pixels covered by one terminal column.
pub const CELL_WIDTH: f32 = 10.0;
/// Logical pixels covered by one terminal row.
pub const CELL_HEIGHT: f32 = 20.0;
/// Spacing of the background grid lines.
pub const GRID_SPACING: f32 = 50.0;
