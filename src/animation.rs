//! Startup light sweep.
//!
//! Holds LED 1 for one step, then bounces a single lit LED back and forth
//! across all six (1,2,3,4,5,6,5,4,3,2) for a fixed number of sweeps. The
//! endpoints show once per sweep and the inner LEDs twice.

use crate::config::{ANIMATION_TICKS, STARTUP_STEPS, SWEEP_BINS};
use crate::types::Position;

const SWEEP: [Position; SWEEP_BINS as usize] = {
    let p = Position::ALL;
    [p[0], p[1], p[2], p[3], p[4], p[5], p[4], p[3], p[2], p[1]]
};

/// Result of advancing the sequencer by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationStep {
    /// Animation running. Exactly this LED is lit.
    Lit(Position),

    /// Animation over. Stays over for the rest of execution.
    Done,
}

/// Deterministic startup animation driven by the tick count since boot.
#[derive(Debug, Clone)]
pub struct AnimationSequencer {
    step_ticks: u32,
    total_ticks: u32,
    done: bool,
}

impl AnimationSequencer {
    /// Sequencer with the reference step length and sweep count.
    pub const fn new() -> Self {
        Self {
            step_ticks: STARTUP_STEPS,
            total_ticks: ANIMATION_TICKS,
            done: false,
        }
    }

    /// Sequencer with a custom step length and number of sweeps.
    ///
    /// Values come from a validated [`Config`](crate::Config); a zero step
    /// length is bumped to one tick and an overflowing length saturates.
    pub const fn with_steps(step_ticks: u32, runs: u32) -> Self {
        let step_ticks = if step_ticks == 0 { 1 } else { step_ticks };
        let total_ticks = step_ticks
            .saturating_mul(SWEEP_BINS)
            .saturating_mul(runs)
            .saturating_add(step_ticks);
        Self {
            step_ticks,
            total_ticks,
            done: false,
        }
    }

    /// Advances to `tick` (ticks elapsed since boot).
    ///
    /// Once `tick` reaches the animation length the sequencer latches
    /// [`AnimationStep::Done`] and never lights an LED again, even if an
    /// earlier tick value is passed later.
    pub fn advance(&mut self, tick: u32) -> AnimationStep {
        if self.done || tick >= self.total_ticks {
            self.done = true;
            return AnimationStep::Done;
        }
        AnimationStep::Lit(self.led_at(tick))
    }

    /// LED lit at `tick`, ignoring whether the animation has ended.
    pub fn led_at(&self, tick: u32) -> Position {
        if tick < self.step_ticks {
            return Position::FIRST;
        }

        let period = self.step_ticks.saturating_mul(SWEEP_BINS);
        let phase = (tick - self.step_ticks) % period;
        SWEEP[(phase / self.step_ticks) as usize]
    }

    /// Total animation length in ticks.
    #[inline]
    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// Ticks per step.
    #[inline]
    pub fn step_ticks(&self) -> u32 {
        self.step_ticks
    }

    /// Returns true once the animation has ended.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::new()
    }
}
