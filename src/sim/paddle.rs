//! The player's paddle
//!
//! Moves horizontally along the bottom of the play area, driven either by
//! the keyboard or by the pointer, never both in the same tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effect::EffectTimer;
use super::rect::Rect;
use crate::render::{Canvas, Color};
use crate::tuning::Tuning;

/// Polled input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaddleInput {
    pub left: bool,
    pub right: bool,
    /// Pointer x in play-area coordinates, if a pointer is present
    pub pointer_x: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    base_width: f32,
    speed: f32,
    arena_width: f32,
    width_effect: EffectTimer,
    /// Pointer x seen on the last pointer-driven tick
    #[serde(skip)]
    last_pointer_x: Option<f32>,
}

impl Paddle {
    /// Centered, `paddle_bottom_offset` above the bottom of the play area
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                (tuning.window_width - tuning.paddle_width) / 2.0,
                tuning.window_height - tuning.paddle_bottom_offset,
            ),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            base_width: tuning.paddle_width,
            speed: tuning.paddle_speed,
            arena_width: tuning.window_width,
            width_effect: EffectTimer::default(),
            last_pointer_x: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Unmodified width
    #[inline]
    pub fn base_width(&self) -> f32 {
        self.base_width
    }

    /// Seconds left on the current width effect
    pub fn width_effect_remaining(&self) -> f32 {
        self.width_effect.remaining()
    }

    pub fn update(&mut self, dt: f32, input: &PaddleInput) {
        if self.width_effect.tick(dt) {
            log::debug!("Paddle width effect expired");
        }
        if !self.width_effect.is_active() && self.width != self.base_width {
            self.resize(1.0);
        }

        match (input.left, input.right) {
            (true, false) => self.slide(-self.speed * dt),
            (false, true) => self.slide(self.speed * dt),
            _ => self.track_pointer(input.pointer_x),
        }
    }

    /// Scale the width by `multiplier` of the base width for `duration` seconds.
    ///
    /// The paddle keeps its center, shifted back inside the play area if the
    /// new width would stick out.
    pub fn set_width_effect(&mut self, multiplier: f32, duration: f32) {
        self.width_effect.start(duration);
        self.resize(multiplier);
    }

    fn resize(&mut self, multiplier: f32) {
        let center = self.center_x();
        self.width = (multiplier * self.base_width).min(self.arena_width);
        self.pos.x = (center - self.width / 2.0).clamp(0.0, self.max_x());
    }

    fn slide(&mut self, dx: f32) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, self.max_x());
    }

    fn track_pointer(&mut self, pointer_x: Option<f32>) {
        let Some(x) = pointer_x else {
            return;
        };
        // The first sighting only records the pointer
        if self.last_pointer_x.is_some_and(|last| last != x) {
            self.pos.x = (x - self.width * 0.5).clamp(0.0, self.max_x());
        }
        self.last_pointer_x = Some(x);
    }

    #[inline]
    fn max_x(&self) -> f32 {
        (self.arena_width - self.width).max(0.0)
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        let size = Vec2::new(self.width, self.height);
        canvas.fill_rect(self.pos + size * 0.5, size, 0.0, Color::CYAN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn paddle() -> Paddle {
        Paddle::new(&Tuning::default())
    }

    fn keys(left: bool, right: bool) -> PaddleInput {
        PaddleInput {
            left,
            right,
            pointer_x: None,
        }
    }

    fn pointer(x: f32) -> PaddleInput {
        PaddleInput {
            pointer_x: Some(x),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_centered_above_bottom() {
        let tuning = Tuning::default();
        let p = paddle();
        assert_eq!(p.center_x(), tuning.window_width / 2.0);
        assert_eq!(p.pos.y, tuning.window_height - tuning.paddle_bottom_offset);
    }

    #[test]
    fn test_keyboard_moves_and_clamps() {
        let mut p = paddle();
        let x0 = p.pos.x;
        p.update(DT, &keys(true, false));
        assert!((p.pos.x - (x0 - p.speed * DT)).abs() < 1e-3);

        for _ in 0..600 {
            p.update(DT, &keys(true, false));
        }
        assert_eq!(p.pos.x, 0.0);

        for _ in 0..600 {
            p.update(DT, &keys(false, true));
        }
        assert_eq!(p.bounds().right(), p.arena_width);
    }

    #[test]
    fn test_both_keys_do_not_move() {
        let mut p = paddle();
        let x0 = p.pos.x;
        p.update(DT, &keys(true, true));
        assert_eq!(p.pos.x, x0);
    }

    #[test]
    fn test_pointer_first_sighting_only_records() {
        let mut p = paddle();
        let x0 = p.pos.x;
        p.update(DT, &pointer(100.0));
        assert_eq!(p.pos.x, x0);

        // Unchanged pointer: no snap either
        p.update(DT, &pointer(100.0));
        assert_eq!(p.pos.x, x0);

        p.update(DT, &pointer(200.0));
        assert_eq!(p.center_x(), 200.0);
    }

    #[test]
    fn test_pointer_clamped_to_window() {
        let mut p = paddle();
        p.update(DT, &pointer(400.0));
        p.update(DT, &pointer(5.0));
        assert_eq!(p.pos.x, 0.0);
        p.update(DT, &pointer(10_000.0));
        assert_eq!(p.bounds().right(), p.arena_width);
    }

    #[test]
    fn test_keyboard_takes_priority_over_pointer() {
        let mut p = paddle();
        p.update(DT, &pointer(400.0));
        let x0 = p.pos.x;
        let input = PaddleInput {
            left: false,
            right: true,
            pointer_x: Some(100.0),
        };
        p.update(DT, &input);
        assert!(p.pos.x > x0);
    }

    #[test]
    fn test_width_effect_keeps_center() {
        let mut p = paddle();
        let center = p.center_x();
        p.set_width_effect(0.5, 2.0);
        assert_eq!(p.width, p.base_width() * 0.5);
        assert_eq!(p.center_x(), center);

        // Repeated calls don't drift
        p.set_width_effect(1.5, 2.0);
        p.set_width_effect(0.5, 2.0);
        assert_eq!(p.center_x(), center);
    }

    #[test]
    fn test_width_reverts_after_duration() {
        let mut p = paddle();
        let center = p.center_x();
        p.set_width_effect(0.5, 2.0);

        for _ in 0..21 {
            p.update(0.1, &PaddleInput::default());
        }
        assert_eq!(p.width, p.base_width());
        assert_eq!(p.center_x(), center);
    }

    #[test]
    fn test_widen_near_wall_stays_inside() {
        let mut p = paddle();
        p.pos.x = 0.0;
        p.set_width_effect(1.5, 5.0);
        assert_eq!(p.pos.x, 0.0);
        assert_eq!(p.width, p.base_width() * 1.5);
    }
}
