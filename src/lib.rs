//! Brickfall - Breakout physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, pickups, game state)
//! - `render`: Drawing boundary the simulation renders into
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use render::{Canvas, Color, DrawCommand, DrawList};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area dimensions (pixels, y grows downward)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Baseline ball speed (pixels/s along each axis)
    pub const BALL_VELOCITY: f32 = 300.0;
    /// Where the ball re-enters play after a lost life
    pub const BALL_SPAWN_X: f32 = 0.0;
    pub const BALL_SPAWN_Y: f32 = 300.0;

    /// Trail sampling
    pub const TRAIL_MIN_DIST2: f32 = 16.0;
    pub const TRAIL_MAX_POINTS: usize = 40;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 600.0;
    /// Distance from the paddle top to the bottom of the window
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Brick grid
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 24.0;
    pub const BRICK_GAP: f32 = 6.0;
    pub const BRICK_TOP: f32 = 60.0;

    /// Debris physics for shattered bricks
    pub const DEBRIS_GRAVITY: f32 = 1200.0;
    /// Upward kick applied on hit (negative = up)
    pub const DEBRIS_KICK: f32 = -300.0;
    /// Horizontal drift range (± pixels/s)
    pub const DEBRIS_DRIFT: f32 = 100.0;
    /// Spin range (± degrees/s)
    pub const DEBRIS_SPIN: f32 = 120.0;

    /// Starting lives
    pub const LIVES: u8 = 3;
    /// Points per broken brick
    pub const BRICK_SCORE: u64 = 10;

    /// Power-up capsules
    pub const POWERUP_DROP_CHANCE: f64 = 0.15;
    pub const POWERUP_FALL_SPEED: f32 = 150.0;
    pub const POWERUP_DURATION: f32 = 8.0;
    pub const POWERUP_SIZE: f32 = 20.0;
}
