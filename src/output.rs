//! Position to LED and analog output mapping.

use crate::config::DAC_MAX;
use crate::types::{LedPattern, Position};

/// Outputs for a resolved position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SteadyOutput {
    /// Status LEDs, only the selected one lit.
    pub leds: LedPattern,

    /// Analog output code.
    pub code: u16,
}

/// Stateless mapping from position to outputs.
///
/// The analog range is split into five equal steps so position 1 drives the
/// minimum and position 6 drives `5 * step`, at or slightly below full scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputDriver {
    step: u16,
}

impl OutputDriver {
    /// Driver for the reference 14-bit DAC.
    pub const REFERENCE: OutputDriver = OutputDriver::new(DAC_MAX);

    /// Driver for a device whose highest code is `max_code`.
    pub const fn new(max_code: u16) -> Self {
        Self { step: max_code / 5 }
    }

    /// Analog step between neighbouring positions.
    #[inline]
    pub const fn step(&self) -> u16 {
        self.step
    }

    /// Analog code for `position`.
    #[inline]
    pub const fn code(&self, position: Position) -> u16 {
        (position.get() as u16 - 1) * self.step
    }

    /// Outputs for `position`.
    pub const fn drive(&self, position: Position) -> SteadyOutput {
        SteadyOutput {
            leds: LedPattern::single(position),
            code: self.code(position),
        }
    }

    /// Outputs for a raw position number. Anything outside 1..=6 drives
    /// position 1.
    pub fn drive_raw(&self, number: u8) -> SteadyOutput {
        self.drive(Position::new(number).unwrap_or(Position::FIRST))
    }
}

impl Default for OutputDriver {
    fn default() -> Self {
        OutputDriver::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DAC_STEP;

    #[test]
    fn reference_endpoints() {
        let driver = OutputDriver::REFERENCE;
        assert_eq!(driver.step(), DAC_STEP);

        let first = driver.drive(Position::FIRST);
        assert_eq!(first.code, 0);
        assert_eq!(first.leds, LedPattern::single(Position::FIRST));

        let last = driver.drive(Position::LAST);
        assert_eq!(last.code, 5 * DAC_STEP);
        assert!(last.code <= DAC_MAX);
    }

    #[test]
    fn raw_fallback_is_first_position() {
        let driver = OutputDriver::REFERENCE;
        assert_eq!(driver.drive_raw(0), driver.drive(Position::FIRST));
        assert_eq!(driver.drive_raw(7), driver.drive(Position::FIRST));
        assert_eq!(driver.drive_raw(200), driver.drive(Position::FIRST));
        assert_eq!(driver.drive_raw(4).code, 3 * DAC_STEP);
    }

    #[test]
    fn step_follows_device_full_scale() {
        let driver = OutputDriver::new(0x0FFF);
        assert_eq!(driver.step(), 819);
        assert_eq!(driver.drive(Position::LAST).code, 4095);
    }
}
