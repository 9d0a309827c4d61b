//! Data-driven game balance
//!
//! Every simulation entity is built from a [`Tuning`]. Defaults come from
//! [`crate::consts`]; overrides can be loaded from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime values for the ball, paddle, bricks and power-ups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub window_width: f32,
    pub window_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_velocity: f32,
    pub ball_spawn: Vec2,
    pub trail_min_dist2: f32,
    pub trail_max_points: usize,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_gap: f32,
    pub brick_top: f32,
    pub debris: DebrisTuning,

    // === Rules ===
    pub lives: u8,
    pub brick_score: u64,
    pub powerup_drop_chance: f64,
    pub powerup_fall_speed: f32,
    pub powerup_duration: f32,
}

/// Largest accepted trail length
const TRAIL_POINTS_LIMIT: usize = TRAIL_MAX_POINTS * 16;
/// Largest accepted debris drift or spin magnitude
const DEBRIS_SPREAD_LIMIT: f32 = 1.0e6;

/// Kinematics of a shattered brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebrisTuning {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Vertical velocity on hit (negative = up)
    pub kick: f32,
    /// Horizontal drift is drawn from [-drift, drift]
    pub drift: f32,
    /// Spin is drawn from [-spin, spin] degrees/s
    pub spin: f32,
}

impl Default for DebrisTuning {
    fn default() -> Self {
        Self {
            gravity: DEBRIS_GRAVITY,
            kick: DEBRIS_KICK,
            drift: DEBRIS_DRIFT,
            spin: DEBRIS_SPIN,
        }
    }
}

fn finite(name: &str, value: &mut f32, fallback: f32) {
    if !value.is_finite() {
        log::warn!("tuning: {name} = {value} is not finite, using {fallback}");
        *value = fallback;
    }
}

/// Symmetric random range half-width: non-negative and small enough to sample
fn spread(name: &str, value: &mut f32, fallback: f32) {
    if value.is_finite() && value.abs() <= DEBRIS_SPREAD_LIMIT {
        *value = value.abs();
    } else {
        log::warn!("tuning: {name} = {value} is out of range, using {fallback}");
        *value = fallback;
    }
}

/// Brick count along one axis: at least one, at most what fits
fn grid_count(name: &str, value: u32, fallback: u32, max: u32) -> u32 {
    if (1..=max).contains(&value) {
        return value;
    }
    let count = fallback.min(max).max(1);
    log::warn!("tuning: {name} = {value} does not fit the window, using {count}");
    count
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_velocity: BALL_VELOCITY,
            ball_spawn: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            trail_min_dist2: TRAIL_MIN_DIST2,
            trail_max_points: TRAIL_MAX_POINTS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top: BRICK_TOP,
            debris: DebrisTuning::default(),

            lives: LIVES,
            brick_score: BRICK_SCORE,
            powerup_drop_chance: POWERUP_DROP_CHANCE,
            powerup_fall_speed: POWERUP_FALL_SPEED,
            powerup_duration: POWERUP_DURATION,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Parse tuning from JSON, falling back to defaults on malformed input
    pub fn load_json(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(err) => {
                log::warn!("Invalid tuning JSON ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Replace values the simulation can't work with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        fn positive(name: &str, value: &mut f32, fallback: f32) {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("tuning: {name} = {value} is not positive, using {fallback}");
                *value = fallback;
            }
        }

        positive("window_width", &mut self.window_width, defaults.window_width);
        positive("window_height", &mut self.window_height, defaults.window_height);
        positive("ball_radius", &mut self.ball_radius, defaults.ball_radius);
        positive("ball_velocity", &mut self.ball_velocity, defaults.ball_velocity);
        positive("paddle_width", &mut self.paddle_width, defaults.paddle_width);
        positive("paddle_height", &mut self.paddle_height, defaults.paddle_height);
        positive("brick_width", &mut self.brick_width, defaults.brick_width);
        positive("brick_height", &mut self.brick_height, defaults.brick_height);

        if self.paddle_width > self.window_width {
            log::warn!("tuning: paddle wider than window, using {}", defaults.paddle_width.min(self.window_width));
            self.paddle_width = defaults.paddle_width.min(self.window_width);
        }
        if self.lives == 0 {
            log::warn!("tuning: lives = 0, using {}", defaults.lives);
            self.lives = defaults.lives;
        }

        if !(self.brick_gap.is_finite() && self.brick_gap >= 0.0) {
            log::warn!("tuning: brick_gap = {}, using {}", self.brick_gap, defaults.brick_gap);
            self.brick_gap = defaults.brick_gap;
        }
        if !self.brick_top.is_finite() {
            log::warn!("tuning: brick_top = {}, using {}", self.brick_top, defaults.brick_top);
            self.brick_top = defaults.brick_top;
        }
        let (max_rows, max_cols) = self.grid_capacity();
        self.brick_rows = grid_count("brick_rows", self.brick_rows, defaults.brick_rows, max_rows);
        self.brick_cols = grid_count("brick_cols", self.brick_cols, defaults.brick_cols, max_cols);

        if !(1..=TRAIL_POINTS_LIMIT).contains(&self.trail_max_points) {
            let points = self.trail_max_points.clamp(1, TRAIL_POINTS_LIMIT);
            log::warn!("tuning: trail_max_points = {}, using {points}", self.trail_max_points);
            self.trail_max_points = points;
        }

        let debris = defaults.debris;
        finite("debris.gravity", &mut self.debris.gravity, debris.gravity);
        finite("debris.kick", &mut self.debris.kick, debris.kick);
        spread("debris.drift", &mut self.debris.drift, debris.drift);
        spread("debris.spin", &mut self.debris.spin, debris.spin);

        if self.powerup_drop_chance.is_finite() {
            self.powerup_drop_chance = self.powerup_drop_chance.clamp(0.0, 1.0);
        } else {
            log::warn!(
                "tuning: powerup_drop_chance = {}, using {}",
                self.powerup_drop_chance,
                defaults.powerup_drop_chance
            );
            self.powerup_drop_chance = defaults.powerup_drop_chance;
        }
        self
    }

    /// Most rows and columns of bricks that fit inside the window
    fn grid_capacity(&self) -> (u32, u32) {
        let rows = (self.window_height - self.brick_top + self.brick_gap)
            / (self.brick_height + self.brick_gap);
        let cols = (self.window_width + self.brick_gap) / (self.brick_width + self.brick_gap);
        // Float to int casts saturate, negatives become 0
        (rows.floor() as u32, cols.floor() as u32)
    }

    /// Play area size
    #[inline]
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width, self.window_height)
    }
}
