//! Power-up capsules dropped by shattered bricks

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::POWERUP_SIZE;
use crate::render::{Canvas, Color};

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    SpeedUp,
    SlowDown,
    FireBall,
    WidePaddle,
    NarrowPaddle,
}

impl PickupKind {
    pub const ALL: [PickupKind; 5] = [
        PickupKind::SpeedUp,
        PickupKind::SlowDown,
        PickupKind::FireBall,
        PickupKind::WidePaddle,
        PickupKind::NarrowPaddle,
    ];

    /// Uniformly random kind
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Speed or width multiplier carried by this kind
    pub fn multiplier(self) -> f32 {
        match self {
            PickupKind::SpeedUp | PickupKind::WidePaddle => 1.5,
            PickupKind::SlowDown | PickupKind::NarrowPaddle => 0.6,
            PickupKind::FireBall => 1.0,
        }
    }

    fn color(self) -> Color {
        match self {
            PickupKind::SpeedUp => Color::YELLOW,
            PickupKind::SlowDown => Color::BLUE,
            PickupKind::FireBall => Color::ORANGE,
            PickupKind::WidePaddle => Color::GREEN,
            PickupKind::NarrowPaddle => Color::MAGENTA,
        }
    }
}

/// A falling capsule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Center
    pub pos: Vec2,
    pub fall_speed: f32,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Vec2, fall_speed: f32) -> Self {
        Self {
            kind,
            pos,
            fall_speed,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.fall_speed * dt;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(POWERUP_SIZE))
    }

    /// Entirely below the play area
    pub fn is_off_screen(&self, window_height: f32) -> bool {
        self.bounds().top > window_height
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.fill_circle(self.pos, POWERUP_SIZE / 2.0, self.kind.color());
    }
}
