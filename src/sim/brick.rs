//! Bricks and their shatter debris
//!
//! A brick is `Intact` until hit, then falls and spins as debris
//! (`Breaking`) until it leaves the bottom of the play area (`Destroyed`).
//! Destroyed is terminal.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::render::{Canvas, Color};
use crate::tuning::DebrisTuning;

/// Lifecycle of a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickState {
    #[default]
    Intact,
    /// Hit; falling as debris
    Breaking,
    /// Off-screen; never drawn or updated again
    Destroyed,
}

/// A single brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Center of the brick
    pub pos: Vec2,
    pub size: Vec2,
    /// Clockwise rotation in degrees
    pub rotation: f32,
    pub color: Color,
    vel: Vec2,
    /// Degrees per second
    spin: f32,
    state: BrickState,
}

impl Brick {
    pub fn new(center: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            pos: center,
            size,
            rotation: 0.0,
            color,
            vel: Vec2::ZERO,
            spin: 0.0,
            state: BrickState::Intact,
        }
    }

    #[inline]
    pub fn state(&self) -> BrickState {
        self.state
    }

    #[inline]
    pub fn is_intact(&self) -> bool {
        self.state == BrickState::Intact
    }

    #[inline]
    pub fn is_breaking(&self) -> bool {
        self.state == BrickState::Breaking
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.state == BrickState::Destroyed
    }

    /// Debris velocity (zero while intact)
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Debris angular velocity in degrees per second
    #[inline]
    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Shatter the brick.
    ///
    /// Returns false if it was already breaking or destroyed, in which case
    /// nothing changes.
    pub fn hit<R: Rng>(&mut self, rng: &mut R, debris: &DebrisTuning) -> bool {
        if self.state != BrickState::Intact {
            return false;
        }

        self.state = BrickState::Breaking;
        let drift = rng.random_range(-debris.drift..=debris.drift);
        self.vel = Vec2::new(drift, debris.kick);
        self.spin = rng.random_range(-debris.spin..=debris.spin);
        true
    }

    /// Advance debris motion.
    ///
    /// Returns true on the tick the brick becomes destroyed.
    pub fn update(&mut self, dt: f32, window_height: f32, debris: &DebrisTuning) -> bool {
        if self.state != BrickState::Breaking {
            return false;
        }

        self.vel.y += debris.gravity * dt;
        self.pos += self.vel * dt;
        self.rotation = (self.rotation + self.spin * dt) % 360.0;

        if self.pos.y - self.size.y * 0.5 > window_height {
            self.state = BrickState::Destroyed;
            return true;
        }
        false
    }

    /// Axis-aligned bounds, covering the rotated shape
    pub fn bounds(&self) -> Rect {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let half = self.size * 0.5;
        let extent = Vec2::new(
            half.x * cos + half.y * sin,
            half.x * sin + half.y * cos,
        );
        Rect::from_center(self.pos, extent * 2.0)
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        if self.is_destroyed() {
            return;
        }
        canvas.fill_rect(self.pos, self.size, self.rotation, self.color);
    }
}
