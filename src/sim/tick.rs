//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order within
//! a tick: paddle, ball, bricks, pickups.

use super::paddle::PaddleInput;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
    /// Pointer x position, if a pointer is present
    pub pointer_x: Option<f32>,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    pub fn paddle_input(&self) -> PaddleInput {
        PaddleInput {
            left: self.left,
            right: self.right,
            pointer_x: self.pointer_x,
        }
    }
}

/// Advance the game state by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    let arena = state.tuning.window_size();

    match state.phase {
        GamePhase::Playing => {}
        // Shattered bricks keep falling until the next level is laid out
        GamePhase::LevelCleared => {
            step_debris(state, dt, arena.y);
            return;
        }
        GamePhase::Paused | GamePhase::GameOver => return,
    }

    state.time_ticks += 1;

    state.paddle.update(dt, &input.paddle_input());

    let report = state.ball.update(
        dt,
        arena,
        state.paddle.bounds(),
        &mut state.bricks,
        &mut state.rng,
    );
    if report.paddle_hit {
        state.push_event(GameEvent::PaddleHit);
    }
    if report.life_lost {
        state.lose_life();
        if state.phase == GamePhase::GameOver {
            return;
        }
    }

    for index in state.bricks.drain_broken() {
        state.score += state.tuning.brick_score;
        state.push_event(GameEvent::BrickBroken { index });
        if let Some(at) = state.bricks.get(index).map(|b| b.pos) {
            state.maybe_drop_pickup(at);
        }
    }

    step_debris(state, dt, arena.y);
    update_pickups(state, dt);

    if state.bricks.is_cleared() {
        state.phase = GamePhase::LevelCleared;
        log::info!("Level cleared with score {}", state.score);
        state.push_event(GameEvent::LevelCleared);
    }
}

fn step_debris(state: &mut GameState, dt: f32, window_height: f32) {
    state.bricks.update(dt, window_height);
    for index in state.bricks.drain_destroyed() {
        state.push_event(GameEvent::BrickDestroyed { index });
    }
}

/// Drop capsules, hand caught ones to the player, forget missed ones
fn update_pickups(state: &mut GameState, dt: f32) {
    let paddle = state.paddle.bounds();
    let window_height = state.tuning.window_height;
    let mut collected = Vec::new();

    state.pickups.retain_mut(|pickup| {
        pickup.update(dt);
        if pickup.bounds().intersects(&paddle) {
            collected.push(pickup.kind);
            false
        } else {
            !pickup.is_off_screen(window_height)
        }
    });

    for kind in collected {
        state.apply_pickup(kind);
    }
}
