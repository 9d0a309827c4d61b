//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep
//! - Seeded RNG only
//! - Stable iteration order (grid order for bricks)
//! - No rendering or platform dependencies beyond the `Canvas` trait

pub mod ball;
pub mod brick;
pub mod bricks;
pub mod effect;
pub mod paddle;
pub mod pickup;
pub mod rect;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallMode, BallReport, paddle_bounce_x};
pub use brick::{Brick, BrickState};
pub use bricks::{BrickCollider, BrickContact, BrickField};
pub use effect::EffectTimer;
pub use paddle::{Paddle, PaddleInput};
pub use pickup::{Pickup, PickupKind};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
