//! Property tests for the simulation invariants

use brickfall::sim::{
    Ball, BallMode, Brick, BrickCollider, BrickContact, Paddle, PaddleInput, Rect, paddle_bounce_x,
};
use brickfall::tuning::DebrisTuning;
use brickfall::{Color, Tuning};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

const ARENA: Vec2 = Vec2::new(800.0, 600.0);

struct NoBricks;

impl BrickCollider for NoBricks {
    fn check_collision(&mut self, _ball: Rect, _direction: Vec2) -> BrickContact {
        BrickContact::NoHit
    }
}

/// Collider that answers from a fixed script
struct Scripted(Vec<BrickContact>, usize);

impl BrickCollider for Scripted {
    fn check_collision(&mut self, _ball: Rect, _direction: Vec2) -> BrickContact {
        let contact = self.0[self.1 % self.0.len()];
        self.1 += 1;
        contact
    }
}

fn unreachable_paddle() -> Rect {
    Rect::new(-10_000.0, -10_000.0, 120.0, 15.0)
}

fn sign() -> impl Strategy<Value = f32> {
    prop_oneof![Just(-1.0f32), Just(1.0f32)]
}

fn contact() -> impl Strategy<Value = BrickContact> {
    prop_oneof![
        Just(BrickContact::NoHit),
        Just(BrickContact::HorizontalFace),
        Just(BrickContact::VerticalFace),
    ]
}

proptest! {
    #[test]
    fn direction_stays_unit_signed_without_paddle(
        x in 0.0f32..780.0,
        y in 0.0f32..590.0,
        dx in sign(),
        dy in sign(),
        dt in 0.001f32..0.05,
        script in prop::collection::vec(contact(), 1..8),
        seed in any::<u64>(),
    ) {
        let mut ball = Ball::new(&Tuning::default());
        ball.pos = Vec2::new(x, y);
        ball.direction = Vec2::new(dx, dy);
        let mut bricks = Scripted(script, 0);
        let mut rng = Pcg32::seed_from_u64(seed);

        for _ in 0..500 {
            let _ = ball.update(dt, ARENA, unreachable_paddle(), &mut bricks, &mut rng);
            prop_assert!(ball.direction.x == 1.0 || ball.direction.x == -1.0);
            prop_assert!(ball.direction.y == 1.0 || ball.direction.y == -1.0);
        }
    }

    #[test]
    fn velocity_is_baseline_without_effects(
        multiplier in 0.1f32..3.0,
        duration in -1.0f32..0.5,
        dt in 0.001f32..0.05,
    ) {
        let mut ball = Ball::new(&Tuning::default());
        ball.set_velocity_effect(multiplier, duration);
        let mut rng = Pcg32::seed_from_u64(0);

        // At least 0.6s of simulated time, longer than any generated duration
        for _ in 0..600 {
            let _ = ball.update(dt, ARENA, unreachable_paddle(), &mut NoBricks, &mut rng);
            if ball.mode() == BallMode::Normal {
                prop_assert_eq!(ball.velocity, ball.base_velocity());
            }
        }
        prop_assert_eq!(ball.mode(), BallMode::Normal);
        prop_assert_eq!(ball.velocity, ball.base_velocity());
    }

    #[test]
    fn floor_crossing_loses_exactly_one_life(
        x in 0.0f32..780.0,
        dx in sign(),
        dt in 0.001f32..0.05,
    ) {
        let tuning = Tuning::default();
        let mut ball = Ball::new(&tuning);
        ball.pos = Vec2::new(x, ARENA.y - 0.0001);
        ball.direction = Vec2::new(dx, 1.0);
        let mut rng = Pcg32::seed_from_u64(0);

        let report = ball.update(dt, ARENA, unreachable_paddle(), &mut NoBricks, &mut rng);
        prop_assert!(report.life_lost);
        prop_assert_eq!(ball.pos, tuning.ball_spawn);
        prop_assert_eq!(ball.direction, Vec2::ONE);

        let report = ball.update(dt, ARENA, unreachable_paddle(), &mut NoBricks, &mut rng);
        prop_assert!(!report.life_lost);
    }

    #[test]
    fn paddle_bounce_is_bounded_and_monotonic(
        left in 0.0f32..700.0,
        width in 10.0f32..300.0,
        a in -50.0f32..400.0,
        b in -50.0f32..400.0,
    ) {
        let paddle = Rect::new(left, 550.0, width, 15.0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let x_lo = paddle_bounce_x(left + lo, paddle);
        let x_hi = paddle_bounce_x(left + hi, paddle);
        prop_assert!((-1.0..=1.0).contains(&x_lo));
        prop_assert!((-1.0..=1.0).contains(&x_hi));
        prop_assert!(x_lo <= x_hi);
    }

    #[test]
    fn brick_lifecycle_is_monotonic(
        seed in any::<u64>(),
        y in 50.0f32..550.0,
        dts in prop::collection::vec(0.001f32..0.05, 1..400),
        hit_at in 0usize..50,
    ) {
        let debris = DebrisTuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut brick = Brick::new(Vec2::new(400.0, y), Vec2::new(70.0, 24.0), Color::RED);
        let mut rank = 0;

        for (i, dt) in dts.iter().enumerate() {
            if i == hit_at {
                brick.hit(&mut rng, &debris);
            }
            let _ = brick.update(*dt, ARENA.y, &debris);
            let now = if brick.is_intact() { 0 } else if brick.is_breaking() { 1 } else { 2 };
            prop_assert!(now >= rank);
            rank = now;
        }
    }

    #[test]
    fn paddle_stays_inside_window(
        moves in prop::collection::vec((any::<bool>(), any::<bool>(), prop::option::of(-200.0f32..1000.0)), 1..200),
        multiplier in 0.2f32..3.0,
    ) {
        let tuning = Tuning::default();
        let mut paddle = Paddle::new(&tuning);
        paddle.set_width_effect(multiplier, 1.0);

        for (left, right, pointer_x) in moves {
            paddle.update(1.0 / 60.0, &PaddleInput { left, right, pointer_x });
            prop_assert!(paddle.pos.x >= 0.0);
            prop_assert!(paddle.bounds().right() <= tuning.window_width + 1e-3);
        }
    }
}
