//! The ball: motion, bounces and power-up state
//!
//! Direction components are flipped, never rescaled, by wall, ceiling and
//! brick bounces. Only the paddle changes the horizontal component's
//! magnitude. Speed lives entirely in the scalar `velocity`.

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bricks::{BrickCollider, BrickContact};
use super::effect::EffectTimer;
use super::rect::Rect;
use crate::consts::TRAIL_MAX_POINTS;
use crate::render::{Canvas, Color};
use crate::tuning::Tuning;

/// Peak trail alpha at the newest sample
const TRAIL_MAX_ALPHA: f32 = 200.0;
/// Extra strips drawn either side of the trail (pixels)
const TRAIL_THICKNESS: i32 = 2;

/// Which power-up currently shapes the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallMode {
    Normal,
    PoweredVelocity,
    FireBall,
}

/// What happened to the ball during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct BallReport {
    /// Fell past the bottom and was put back at the spawn point
    pub life_lost: bool,
    pub paddle_hit: bool,
    /// Brick contact reported by the collider (even if a fireball ignored it)
    pub brick: BrickContact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's bounding box
    pub pos: Vec2,
    pub direction: Vec2,
    /// Current speed multiplier applied to `direction`
    pub velocity: f32,
    pub radius: f32,
    pub alive: bool,
    pub color: Color,
    base_velocity: f32,
    spawn: Vec2,
    speed_effect: EffectTimer,
    fireball_effect: EffectTimer,
    trail_min_dist2: f32,
    trail_max_points: usize,
    /// Trail of ball centers, oldest first
    #[serde(skip)]
    trail: VecDeque<Vec2>,
    #[serde(skip)]
    last_trail_pos: Vec2,
}

impl Ball {
    pub fn new(tuning: &Tuning) -> Self {
        let trail_max_points = tuning.trail_max_points.max(1);
        let mut ball = Self {
            pos: tuning.ball_spawn,
            direction: Vec2::ONE,
            velocity: tuning.ball_velocity,
            radius: tuning.ball_radius,
            alive: true,
            color: Color::CYAN,
            base_velocity: tuning.ball_velocity,
            spawn: tuning.ball_spawn,
            speed_effect: EffectTimer::default(),
            fireball_effect: EffectTimer::default(),
            trail_min_dist2: tuning.trail_min_dist2,
            trail_max_points,
            trail: VecDeque::with_capacity(trail_max_points.min(TRAIL_MAX_POINTS)),
            last_trail_pos: Vec2::ZERO,
        };
        ball.reset_trail();
        ball
    }

    /// Baseline speed the ball returns to when no effect is active
    #[inline]
    pub fn base_velocity(&self) -> f32 {
        self.base_velocity
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    pub fn bounds(&self) -> Rect {
        let d = self.radius * 2.0;
        Rect::new(self.pos.x, self.pos.y, d, d)
    }

    #[inline]
    pub fn is_fireball(&self) -> bool {
        self.fireball_effect.is_active()
    }

    pub fn mode(&self) -> BallMode {
        if self.is_fireball() {
            BallMode::FireBall
        } else if self.speed_effect.is_active() {
            BallMode::PoweredVelocity
        } else {
            BallMode::Normal
        }
    }

    /// Trail samples (ball centers), oldest first
    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }

    /// Back to the spawn point heading down-right, trail cleared
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.direction = Vec2::ONE;
        self.reset_trail();
    }

    /// Run at `multiplier` times the baseline speed for `duration` seconds
    pub fn set_velocity_effect(&mut self, multiplier: f32, duration: f32) {
        self.velocity = multiplier * self.base_velocity;
        self.speed_effect.start(duration);
    }

    /// Pass through bricks for `duration` seconds. Zero or less switches it off.
    pub fn set_fireball(&mut self, duration: f32) {
        if duration > 0.0 {
            self.fireball_effect.start(duration);
        } else {
            self.fireball_effect.cancel();
            self.color = Color::CYAN;
        }
    }

    /// Advance one tick against the play area, the paddle and the bricks
    pub fn update<B, R>(
        &mut self,
        dt: f32,
        arena: Vec2,
        paddle: Rect,
        bricks: &mut B,
        rng: &mut R,
    ) -> BallReport
    where
        B: BrickCollider,
        R: Rng,
    {
        let mut report = BallReport::default();
        if !self.alive {
            return report;
        }

        self.decay_effects(dt);

        if self.is_fireball() {
            let flicker: u8 = rng.random_range(205..255);
            self.color = Color::rgb(flicker, flicker / 2, 0);
        }

        self.pos += self.direction * self.velocity * dt;
        self.add_trail_point(self.center());

        // Walls
        let diameter = self.radius * 2.0;
        if (self.pos.x >= arena.x - diameter && self.direction.x > 0.0)
            || (self.pos.x <= 0.0 && self.direction.x < 0.0)
        {
            self.direction.x = -self.direction.x;
        }

        // Ceiling
        if self.pos.y <= 0.0 && self.direction.y < 0.0 {
            self.direction.y = -self.direction.y;
        }

        // Floor
        if self.pos.y > arena.y {
            log::debug!("Ball fell out at x={:.1}", self.pos.x);
            self.respawn();
            report.life_lost = true;
        }

        // Paddle
        if self.bounds().intersects(&paddle) {
            self.direction.y = -self.direction.y;
            self.direction.x = paddle_bounce_x(self.pos.x, paddle);
            self.pos.y = paddle.top - diameter;
            report.paddle_hit = true;
        }

        // Bricks; the collider registers the hit even for a fireball
        report.brick = bricks.check_collision(self.bounds(), self.direction);
        if !self.is_fireball() {
            match report.brick {
                BrickContact::HorizontalFace => self.direction.x = -self.direction.x,
                BrickContact::VerticalFace => self.direction.y = -self.direction.y,
                BrickContact::NoHit => {}
            }
        }

        report
    }

    fn decay_effects(&mut self, dt: f32) {
        if self.speed_effect.tick(dt) {
            log::debug!("Ball speed effect expired");
        }
        if !self.speed_effect.is_active() {
            self.velocity = self.base_velocity;
        }

        if self.fireball_effect.tick(dt) {
            log::debug!("Fireball expired");
            self.color = Color::CYAN;
        }
    }

    fn add_trail_point(&mut self, p: Vec2) {
        if p.distance_squared(self.last_trail_pos) < self.trail_min_dist2 {
            return;
        }
        self.trail.push_back(p);
        self.last_trail_pos = p;
        while self.trail.len() > self.trail_max_points {
            self.trail.pop_front();
        }
    }

    fn reset_trail(&mut self) {
        self.trail.clear();
        self.last_trail_pos = self.center();
        self.trail.push_back(self.last_trail_pos);
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        self.render_trail(canvas);
        canvas.fill_circle(self.center(), self.radius, self.color);
    }

    fn render_trail(&self, canvas: &mut impl Canvas) {
        let n = self.trail.len();
        if n < 2 {
            return;
        }

        let base = if self.is_fireball() {
            Color::ORANGE
        } else {
            Color::CYAN
        };
        let colors: Vec<Color> = (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                base.with_alpha((t * TRAIL_MAX_ALPHA) as u8)
            })
            .collect();

        for offset in -TRAIL_THICKNESS..=TRAIL_THICKNESS {
            let shift = Vec2::new(offset as f32, 0.0);
            let points: Vec<Vec2> = self.trail.iter().map(|&p| p + shift).collect();
            canvas.polyline(&points, &colors);
        }
    }
}

/// Horizontal direction after a paddle hit.
///
/// Linear in the impact position: -1 at the paddle's left edge, 0 at its
/// center, +1 at its right edge. `ball_x` is the left side of the ball's
/// bounding box, so the clamp only bites for a ball overhanging the
/// paddle's left edge.
pub fn paddle_bounce_x(ball_x: f32, paddle: Rect) -> f32 {
    let t = (ball_x - paddle.left) / paddle.width;
    (t * 2.0 - 1.0).clamp(-1.0, 1.0)
}
