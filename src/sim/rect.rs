//! Axis-aligned rectangles for bounds queries
//!
//! Screen space: x grows right, y grows down, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Overlap extents along each axis, if the rectangles overlap.
    ///
    /// Touching edges do not count as overlap.
    pub fn overlap(&self, other: &Rect) -> Option<Vec2> {
        let x = self.right().min(other.right()) - self.left.max(other.left);
        let y = self.bottom().min(other.bottom()) - self.top.max(other.top);
        if x > 0.0 && y > 0.0 {
            Some(Vec2::new(x, y))
        } else {
            None
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlap(other).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_extents() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(7.0, 4.0, 10.0, 10.0);
        assert_eq!(a.overlap(&b), Some(Vec2::new(3.0, 6.0)));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let beside = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&beside));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(50.0, 20.0), Vec2::new(40.0, 10.0));
        assert_eq!(r.left, 30.0);
        assert_eq!(r.top, 15.0);
        assert_eq!(r.right(), 70.0);
        assert_eq!(r.bottom(), 25.0);
        assert_eq!(r.center(), Vec2::new(50.0, 20.0));
    }
}
