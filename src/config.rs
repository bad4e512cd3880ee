//! Build-time configuration.
//!
//! Every timing value and threshold is a compile-time constant. [`Config`]
//! bundles them so the dispatcher can be built from one validated value;
//! [`Config::DEFAULT`] is the reference configuration of the selector board.

use crate::debounce::Arbitration;
use crate::time::TickRate;

/// Number of switch positions, LEDs and confidence counters.
pub const POSITION_COUNT: usize = 6;

/// Rate of the periodic tick in Hz.
pub const TICK_RATE_HZ: u32 = 500;

/// System clock of the reference board in Hz.
pub const REFERENCE_SYSCLK_HZ: u32 = 3_062_500;

/// Consecutive active ticks needed before a position is selected.
pub const DEBOUNCE_LIMIT: u8 = 10;

/// Ticks per animation step. Also the length of the initial hold on LED 1.
pub const STARTUP_STEPS: u32 = 50;

/// Number of full back-and-forth sweeps played after the hold.
pub const ANIMATION_RUNS: u32 = 4;

/// Steps in one sweep period (1,2,3,4,5,6,5,4,3,2).
pub const SWEEP_BINS: u32 = 10;

/// Total ticks spent in the startup animation.
pub const ANIMATION_TICKS: u32 = STARTUP_STEPS + SWEEP_BINS * STARTUP_STEPS * ANIMATION_RUNS;

/// Highest code accepted by the reference 14-bit current DAC.
pub const DAC_MAX: u16 = 0x3FFF;

/// Analog step between two neighbouring positions on the reference DAC.
pub const DAC_STEP: u16 = DAC_MAX / 5;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Animation step length of zero ticks.
    ZeroStepTicks,

    /// Animation with no sweeps.
    ZeroAnimationRuns,

    /// Debounce limit of zero.
    ZeroDebounceLimit,

    /// Animation length does not fit in the tick counter.
    AnimationTooLong,

    /// Timer reload count outside the timer's range.
    TimerReloadOutOfRange {
        /// Computed reload count.
        counts: u32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroStepTicks => {
                write!(f, "animation step must last at least one tick")
            }
            ConfigError::ZeroAnimationRuns => {
                write!(f, "animation must play at least one sweep")
            }
            ConfigError::ZeroDebounceLimit => {
                write!(f, "debounce limit must be at least one tick")
            }
            ConfigError::AnimationTooLong => {
                write!(f, "animation length overflows the tick counter")
            }
            ConfigError::TimerReloadOutOfRange { counts } => {
                write!(f, "timer reload count {} is outside 1..=32767", counts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Complete build-time configuration of the selector core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Tick rate the dispatcher is driven at.
    pub tick_rate: TickRate,

    /// Ticks per animation step.
    pub step_ticks: u32,

    /// Number of sweeps after the hold.
    pub animation_runs: u32,

    /// Debounce saturation limit.
    pub debounce_limit: u8,

    /// How concurrent presses affect each other's counters.
    pub arbitration: Arbitration,
}

impl Config {
    /// Reference configuration.
    pub const DEFAULT: Config = Config {
        tick_rate: TickRate::REFERENCE,
        step_ticks: STARTUP_STEPS,
        animation_runs: ANIMATION_RUNS,
        debounce_limit: DEBOUNCE_LIMIT,
        arbitration: Arbitration::Independent,
    };

    /// Total animation length in ticks, `None` on overflow.
    pub const fn animation_ticks(&self) -> Option<u32> {
        let Some(period) = self.step_ticks.checked_mul(SWEEP_BINS) else {
            return None;
        };
        let Some(sweeps) = period.checked_mul(self.animation_runs) else {
            return None;
        };
        sweeps.checked_add(self.step_ticks)
    }

    /// Checks that the configuration describes a playable animation and a
    /// usable debounce limit.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.step_ticks == 0 {
            return Err(ConfigError::ZeroStepTicks);
        }
        if self.animation_runs == 0 {
            return Err(ConfigError::ZeroAnimationRuns);
        }
        if self.debounce_limit == 0 {
            return Err(ConfigError::ZeroDebounceLimit);
        }
        if self.animation_ticks().is_none() {
            return Err(ConfigError::AnimationTooLong);
        }
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::DEFAULT
    }
}
