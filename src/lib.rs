//! Bug Crossing - a lane-crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, game state)
//! - `render`: Drawing seam between the simulation and a concrete canvas
//! - `settings`: Data-driven configuration

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Width of one terrain tile (and one selector step)
    pub const TILE_WIDTH: f32 = 101.0;
    /// Height of one terrain row (and one vertical player step)
    pub const ROW_HEIGHT: f32 = 83.0;
    /// Number of terrain columns across the field
    pub const COLUMNS: u32 = 5;
    /// Number of terrain rows (water, 3 stone, 2 grass)
    pub const ROWS: u32 = 6;
    /// Default play-field width (5 columns of 101 px)
    pub const DEFAULT_FIELD_WIDTH: f32 = TILE_WIDTH * COLUMNS as f32;

    /// Enemy lanes
    pub const LANE_COUNT: u32 = 3;
    /// y of the topmost enemy lane
    pub const ENEMY_MIN_Y: f32 = 58.0;
    /// Respawn x, far enough left that the whole sprite starts off-screen
    pub const ENEMY_SPAWN_X: f32 = -200.0;
    /// Enemy speed is a multiple of this (units/s)
    pub const ENEMY_SPEED_STEP: f32 = 100.0;
    /// Number of discrete enemy speeds (100, 200, 300, 400)
    pub const ENEMY_SPEED_TIERS: u32 = 4;
    /// Enemies in a default world
    pub const DEFAULT_ENEMY_COUNT: usize = 3;

    /// Player y at the far shore (the water row)
    pub const PLAYER_MIN_Y: f32 = -35.0;
    /// Points for reaching the water
    pub const SHORE_BONUS: u32 = 5;

    /// Fallback collider radius when the supplied one is unusable
    pub const DEFAULT_COLLIDER_RADIUS: f32 = 10.0;
}
