//! Brickfall entry point
//!
//! Runs a headless game with an autopilot paddle at a fixed timestep and
//! logs what happens. Usage: `brickfall [seed]`. Set `BRICKFALL_TUNING` to
//! a JSON file to override tuning values.

use brickfall::consts::{MAX_SUBSTEPS, SIM_DT};
use brickfall::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use brickfall::{DrawList, Tuning};

/// Simulated display refresh
const FRAME_DT: f32 = 1.0 / 60.0;
/// Two minutes of play
const MAX_FRAMES: u32 = 60 * 120;
const DEFAULT_SEED: u64 = 0x5EED;

/// Game instance holding all state
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    frames: u32,
    bricks_broken: u32,
    pickups: u32,
}

impl Game {
    fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            accumulator: 0.0,
            input: TickInput::default(),
            frames: 0,
            bricks_broken: 0,
            pickups: 0,
        }
    }

    /// Steer the paddle under the ball, wobbling a little to vary the angles
    fn autopilot(&mut self) {
        let wobble = (self.frames as f32 * 0.05).sin() * 30.0;
        self.input.pointer_x = Some(self.state.ball.center().x + wobble);
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.pause = false;

            for event in self.state.drain_events() {
                self.on_event(event);
            }
        }
        self.frames += 1;
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::BrickBroken { .. } => self.bricks_broken += 1,
            GameEvent::PickupCollected { kind } => {
                self.pickups += 1;
                log::info!("Collected {kind:?}");
            }
            GameEvent::LifeLost { lives_left } => log::info!("Lost a life ({lives_left} left)"),
            GameEvent::LevelCleared => log::info!("Level {} cleared", self.state.level + 1),
            GameEvent::GameOver => log::info!("Game over"),
            GameEvent::PaddleHit
            | GameEvent::BrickDestroyed { .. }
            | GameEvent::PickupDropped { .. } => log::trace!("{event:?}"),
        }
    }
}

fn load_tuning() -> Tuning {
    let Ok(path) = std::env::var("BRICKFALL_TUNING") else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(json) => Tuning::load_json(&json),
        Err(err) => {
            log::warn!("Can't read tuning file {path}: {err}");
            Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    log::info!("Brickfall (headless) starting, seed {seed}");

    let mut game = Game::new(seed, load_tuning());

    while game.frames < MAX_FRAMES {
        game.autopilot();
        game.update(FRAME_DT);

        match game.state.phase {
            GamePhase::LevelCleared => game.state.next_level(),
            GamePhase::GameOver => break,
            GamePhase::Playing | GamePhase::Paused => {}
        }
    }

    let mut frame = DrawList::new();
    game.state.render(&mut frame);

    println!("Frames:         {}", game.frames);
    println!("Ticks:          {}", game.state.time_ticks);
    println!("Levels cleared: {}", game.state.level);
    println!("Bricks broken:  {}", game.bricks_broken);
    println!("Pickups caught: {}", game.pickups);
    println!("Score:          {}", game.state.score);
    println!("Lives left:     {}", game.state.lives);
    println!("Draw commands:  {}", frame.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless runner on the web; embedders drive `sim::tick` themselves
}
