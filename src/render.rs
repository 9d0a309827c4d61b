//! Drawing boundary
//!
//! The simulation never touches pixels. Entities describe themselves to a
//! [`Canvas`]; a windowing backend implements it, and [`DrawList`] records
//! the commands for tests and headless runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ORANGE: Color = Color::rgb(255, 140, 0);
    pub const YELLOW: Color = Color::rgb(255, 220, 0);
    pub const GREEN: Color = Color::rgb(0, 220, 90);
    pub const BLUE: Color = Color::rgb(40, 120, 255);
    pub const MAGENTA: Color = Color::rgb(220, 0, 220);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// A surface the simulation can draw into
pub trait Canvas {
    /// Filled rectangle centered at `center`, rotated clockwise by `rotation_deg`
    fn fill_rect(&mut self, center: Vec2, size: Vec2, rotation_deg: f32, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Connected line strip; `colors` holds one color per point
    fn polyline(&mut self, points: &[Vec2], colors: &[Color]);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Rect {
        center: Vec2,
        size: Vec2,
        rotation_deg: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Polyline {
        points: Vec<Vec2>,
        colors: Vec<Color>,
    },
}

/// Canvas that records commands instead of rasterizing them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, center: Vec2, size: Vec2, rotation_deg: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            center,
            size,
            rotation_deg,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn polyline(&mut self, points: &[Vec2], colors: &[Color]) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            colors: colors.to_vec(),
        });
    }
}
