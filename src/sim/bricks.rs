//! The brick collection
//!
//! Lays out the grid, answers the ball's collision queries and steps the
//! debris of every brick.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::brick::Brick;
use super::rect::Rect;
use crate::render::{Canvas, Color};
use crate::tuning::{DebrisTuning, Tuning};

/// Which way the ball should bounce after touching a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrickContact {
    #[default]
    NoHit,
    /// Struck a left or right face: flip horizontal direction
    HorizontalFace,
    /// Struck a top or bottom face: flip vertical direction
    VerticalFace,
}

/// Anything the ball can collide with brick-wise.
///
/// The implementor picks the brick (if any) and shatters it.
pub trait BrickCollider {
    fn check_collision(&mut self, ball: Rect, direction: Vec2) -> BrickContact;
}

/// Row colors, top row first
const ROW_PALETTE: [Color; 6] = [
    Color::RED,
    Color::ORANGE,
    Color::YELLOW,
    Color::GREEN,
    Color::BLUE,
    Color::MAGENTA,
];

/// All bricks of a level
#[derive(Debug, Clone)]
pub struct BrickField {
    bricks: Vec<Brick>,
    debris: DebrisTuning,
    rng: Pcg32,
    /// Indices shattered since the last drain
    broken: Vec<usize>,
    /// Indices that left the screen since the last drain
    destroyed: Vec<usize>,
}

impl BrickField {
    pub fn new(bricks: Vec<Brick>, debris: DebrisTuning, rng: Pcg32) -> Self {
        Self {
            bricks,
            debris,
            rng,
            broken: Vec::new(),
            destroyed: Vec::new(),
        }
    }

    /// Build the standard grid, centered horizontally
    pub fn grid(tuning: &Tuning, rng: Pcg32) -> Self {
        let cols = tuning.brick_cols;
        let rows = tuning.brick_rows;
        let size = Vec2::new(tuning.brick_width, tuning.brick_height);
        let step = size + Vec2::splat(tuning.brick_gap);

        let total_width = cols as f32 * step.x - tuning.brick_gap;
        let left = (tuning.window_width - total_width) / 2.0;

        let mut bricks = Vec::with_capacity((rows as usize).saturating_mul(cols as usize));
        for row in 0..rows {
            let color = ROW_PALETTE[row as usize % ROW_PALETTE.len()];
            for col in 0..cols {
                let center = Vec2::new(
                    left + col as f32 * step.x + size.x / 2.0,
                    tuning.brick_top + row as f32 * step.y + size.y / 2.0,
                );
                bricks.push(Brick::new(center, size, color));
            }
        }

        log::debug!("Laid out {} bricks ({rows}x{cols})", bricks.len());
        Self::new(bricks, tuning.debris, rng)
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Bricks still standing
    pub fn intact_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_intact()).count()
    }

    /// True once no brick is left to hit
    pub fn is_cleared(&self) -> bool {
        self.intact_count() == 0
    }

    /// Shatter a brick directly. Returns false if it was not intact.
    pub fn hit(&mut self, index: usize) -> bool {
        let Some(brick) = self.bricks.get_mut(index) else {
            return false;
        };
        if brick.hit(&mut self.rng, &self.debris) {
            log::debug!("Brick {index} shattered");
            self.broken.push(index);
            true
        } else {
            false
        }
    }

    /// Step all debris
    pub fn update(&mut self, dt: f32, window_height: f32) {
        for (index, brick) in self.bricks.iter_mut().enumerate() {
            if brick.update(dt, window_height, &self.debris) {
                log::debug!("Brick {index} debris left the screen");
                self.destroyed.push(index);
            }
        }
    }

    /// Take the indices shattered since the last call
    pub fn drain_broken(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.broken)
    }

    /// Take the indices destroyed since the last call
    pub fn drain_destroyed(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.destroyed)
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        for brick in &self.bricks {
            brick.render(canvas);
        }
    }
}

impl BrickCollider for BrickField {
    fn check_collision(&mut self, ball: Rect, direction: Vec2) -> BrickContact {
        let hit = self
            .bricks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_intact())
            .find_map(|(i, b)| {
                let bounds = b.bounds();
                ball.overlap(&bounds).map(|overlap| (i, bounds, overlap))
            });

        let Some((index, bounds, overlap)) = hit else {
            return BrickContact::NoHit;
        };

        let contact = face_for(ball, bounds, overlap, direction);
        self.hit(index);
        contact
    }
}

/// Side hits need the shallower horizontal overlap and the ball heading
/// into that side; everything else bounces vertically.
fn face_for(ball: Rect, brick: Rect, overlap: Vec2, direction: Vec2) -> BrickContact {
    let ball_x = ball.center().x;
    let brick_x = brick.center().x;
    let heading_in = (ball_x < brick_x && direction.x > 0.0) || (ball_x > brick_x && direction.x < 0.0);

    if overlap.x < overlap.y && heading_in {
        BrickContact::HorizontalFace
    } else {
        BrickContact::VerticalFace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn field() -> BrickField {
        BrickField::grid(&Tuning::default(), Pcg32::seed_from_u64(1))
    }

    fn single(center: Vec2) -> BrickField {
        BrickField::new(
            vec![Brick::new(center, Vec2::new(70.0, 24.0), Color::RED)],
            DebrisTuning::default(),
            Pcg32::seed_from_u64(1),
        )
    }

    #[test]
    fn test_grid_layout() {
        let tuning = Tuning::default();
        let field = field();
        assert_eq!(field.len(), (tuning.brick_rows * tuning.brick_cols) as usize);
        assert_eq!(field.intact_count(), field.len());

        // Centered: left margin equals right margin
        let left = field.bricks().iter().map(|b| b.bounds().left).fold(f32::MAX, f32::min);
        let right = field.bricks().iter().map(|b| b.bounds().right()).fold(f32::MIN, f32::max);
        assert!((left - (tuning.window_width - right)).abs() < 1e-3);

        // Rows take palette colors
        assert_eq!(field.bricks()[0].color, Color::RED);
        assert_eq!(field.bricks()[tuning.brick_cols as usize].color, Color::ORANGE);
    }

    #[test]
    fn test_miss() {
        let mut field = single(Vec2::new(400.0, 100.0));
        let ball = Rect::new(10.0, 400.0, 16.0, 16.0);
        assert_eq!(field.check_collision(ball, Vec2::new(1.0, -1.0)), BrickContact::NoHit);
        assert!(field.drain_broken().is_empty());
    }

    #[test]
    fn test_hit_from_below_is_vertical() {
        let mut field = single(Vec2::new(400.0, 100.0));
        // Ball poking 3px into the bottom face, well inside horizontally
        let ball = Rect::new(392.0, 109.0, 16.0, 16.0);
        assert_eq!(field.check_collision(ball, Vec2::new(1.0, -1.0)), BrickContact::VerticalFace);
        assert_eq!(field.drain_broken(), vec![0]);
        assert!(field.bricks()[0].is_breaking());
    }

    #[test]
    fn test_hit_from_the_side_is_horizontal() {
        let mut field = single(Vec2::new(400.0, 100.0));
        // Ball poking 2px into the left face
        let ball = Rect::new(351.0, 92.0, 16.0, 16.0);
        assert_eq!(field.check_collision(ball, Vec2::new(1.0, 1.0)), BrickContact::HorizontalFace);
    }

    #[test]
    fn test_side_overlap_moving_away_is_vertical() {
        let mut field = single(Vec2::new(400.0, 100.0));
        let ball = Rect::new(351.0, 92.0, 16.0, 16.0);
        assert_eq!(field.check_collision(ball, Vec2::new(-1.0, 1.0)), BrickContact::VerticalFace);
    }

    #[test]
    fn test_breaking_bricks_are_not_hit_again() {
        let mut field = single(Vec2::new(400.0, 100.0));
        let ball = Rect::new(392.0, 109.0, 16.0, 16.0);
        field.check_collision(ball, Vec2::new(1.0, -1.0));
        field.drain_broken();

        assert_eq!(field.check_collision(ball, Vec2::new(1.0, -1.0)), BrickContact::NoHit);
        assert!(field.drain_broken().is_empty());
        assert!(field.is_cleared());
    }

    #[test]
    fn test_debris_destroyed_once() {
        let mut field = single(Vec2::new(400.0, 580.0));
        assert!(field.hit(0));
        assert!(!field.hit(0));
        assert!(!field.hit(99));

        for _ in 0..300 {
            field.update(1.0 / 60.0, 600.0);
        }
        assert_eq!(field.drain_destroyed(), vec![0]);
        assert!(field.drain_destroyed().is_empty());
        assert!(field.bricks()[0].is_destroyed());
    }
}
