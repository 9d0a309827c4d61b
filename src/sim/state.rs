//! Game state and round bookkeeping
//!
//! Owns the paddle, ball, bricks and pickups, the lives and score, and the
//! seeded RNG streams that keep a run reproducible.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickField;
use super::paddle::Paddle;
use super::pickup::{Pickup, PickupKind};
use crate::render::Canvas;
use crate::tuning::Tuning;

/// RNG stream for fireball flicker and pickup drops
const STREAM_GAME: u64 = 0;
/// RNG stream for brick debris
const STREAM_DEBRIS: u64 = 1;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Every brick has been broken
    LevelCleared,
    /// Out of lives
    GameOver,
}

/// Something the outside world may want to react to (sound, HUD, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit,
    LifeLost { lives_left: u8 },
    BrickBroken { index: usize },
    /// Debris of a broken brick left the screen
    BrickDestroyed { index: usize },
    PickupDropped { kind: PickupKind },
    PickupCollected { kind: PickupKind },
    LevelCleared,
    GameOver,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u64,
    /// Cleared levels so far
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    pub pickups: Vec<Pickup>,
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        log::info!("New game (seed {seed})");
        Self {
            seed,
            phase: GamePhase::Playing,
            lives: tuning.lives,
            score: 0,
            level: 0,
            time_ticks: 0,
            paddle: Paddle::new(&tuning),
            ball: Ball::new(&tuning),
            bricks: BrickField::grid(&tuning, Pcg32::new(seed, STREAM_DEBRIS)),
            pickups: Vec::new(),
            rng: Pcg32::new(seed, STREAM_GAME),
            events: Vec::new(),
            tuning,
        }
    }

    /// Lay out a fresh brick grid and put the ball back in play
    pub fn next_level(&mut self) {
        self.level += 1;
        let stream_seed = self.seed.wrapping_add(u64::from(self.level));
        self.bricks = BrickField::grid(&self.tuning, Pcg32::new(stream_seed, STREAM_DEBRIS));
        self.pickups.clear();
        self.ball.respawn();
        self.phase = GamePhase::Playing;
        log::info!("Level {} started", self.level + 1);
    }

    /// Take a life away; the last one ends the game
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::info!("Life lost, {} left", self.lives);
        self.push_event(GameEvent::LifeLost {
            lives_left: self.lives,
        });

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.ball.alive = false;
            log::info!("Game over with score {}", self.score);
            self.push_event(GameEvent::GameOver);
        }
    }

    /// Apply a collected power-up to the ball or paddle
    pub fn apply_pickup(&mut self, kind: PickupKind) {
        let duration = self.tuning.powerup_duration;
        match kind {
            PickupKind::SpeedUp | PickupKind::SlowDown => {
                self.ball.set_velocity_effect(kind.multiplier(), duration)
            }
            PickupKind::FireBall => self.ball.set_fireball(duration),
            PickupKind::WidePaddle | PickupKind::NarrowPaddle => {
                self.paddle.set_width_effect(kind.multiplier(), duration)
            }
        }
        log::debug!("Power-up {kind:?} active for {duration}s");
        self.push_event(GameEvent::PickupCollected { kind });
    }

    /// Roll for a pickup drop where a brick was broken
    pub(crate) fn maybe_drop_pickup(&mut self, at: Vec2) {
        if !self.rng.random_bool(self.tuning.powerup_drop_chance) {
            return;
        }
        let kind = PickupKind::random(&mut self.rng);
        self.pickups
            .push(Pickup::new(kind, at, self.tuning.powerup_fall_speed));
        self.push_event(GameEvent::PickupDropped { kind });
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Draw everything, back to front
    pub fn render(&self, canvas: &mut impl Canvas) {
        self.bricks.render(canvas);
        for pickup in &self.pickups {
            pickup.render(canvas);
        }
        self.paddle.render(canvas);
        if self.ball.alive {
            self.ball.render(canvas);
        }
    }
}
