//! Tick timing helpers.

use crate::config::{ConfigError, TICK_RATE_HZ};

/// Largest reload count a 16-bit auto-reload timer accepts when loaded as a
/// negative signed value.
pub const MAX_TIMER_COUNTS: u32 = i16::MAX as u32;

/// Fixed rate at which the dispatcher is ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickRate(u32);

impl TickRate {
    /// Reference 500 Hz tick.
    pub const REFERENCE: TickRate = TickRate(TICK_RATE_HZ);

    /// Creates a tick rate, `None` for 0 Hz.
    pub const fn from_hz(hz: u32) -> Option<Self> {
        if hz == 0 { None } else { Some(TickRate(hz)) }
    }

    /// Returns the rate in Hz.
    #[inline]
    pub const fn hz(&self) -> u32 {
        self.0
    }

    /// Length of one tick in microseconds (rounded down).
    #[inline]
    pub const fn period_micros(&self) -> u32 {
        1_000_000 / self.0
    }

    /// Converts a tick count to elapsed milliseconds (rounded down).
    pub const fn ticks_to_millis(&self, ticks: u32) -> u64 {
        (ticks as u64) * 1_000 / (self.0 as u64)
    }

    /// Converts milliseconds to whole ticks (rounded down, saturating).
    pub const fn millis_to_ticks(&self, millis: u64) -> u32 {
        let ticks = millis.saturating_mul(self.0 as u64) / 1_000;
        if ticks > u32::MAX as u64 {
            u32::MAX
        } else {
            ticks as u32
        }
    }

    /// Timer counts per tick for a timer clocked at `sysclk_hz`.
    ///
    /// The count has to fit the positive range of a signed 16-bit value
    /// since the timer is loaded with its negation.
    pub fn timer_reload_counts(&self, sysclk_hz: u32) -> Result<u16, ConfigError> {
        let counts = sysclk_hz / self.0;
        if counts == 0 || counts > MAX_TIMER_COUNTS {
            return Err(ConfigError::TimerReloadOutOfRange { counts });
        }
        Ok(counts as u16)
    }

    /// Value to write into a 16-bit up-counting timer's reload register.
    pub fn timer_reload_value(&self, sysclk_hz: u32) -> Result<u16, ConfigError> {
        self.timer_reload_counts(sysclk_hz).map(u16::wrapping_neg)
    }
}

impl Default for TickRate {
    fn default() -> Self {
        TickRate::REFERENCE
    }
}
