//! Timed power-up effects
//!
//! An effect is active while its remaining time is positive. Re-applying an
//! effect overwrites the remaining time; effects never stack.

use serde::{Deserialize, Serialize};

/// Countdown for one temporary effect
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectTimer {
    remaining: f32,
}

impl EffectTimer {
    /// (Re)start the countdown. Non-positive durations leave it inactive.
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration;
    }

    pub fn cancel(&mut self) {
        self.remaining = 0.0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Seconds left, never negative
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }

    /// Advance the countdown. Returns true on the tick the effect runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining -= dt;
        !self.is_active()
    }
}
