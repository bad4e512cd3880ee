//! `embedded-hal` adapters for the switch and LED traits.
//!
//! Each adapter owns six pins of the same type, indexed by position. Most HALs
//! offer a type-erased pin (e.g. `AnyPin`, `ErasedPin`) that makes six
//! different GPIOs fit one array.

use crate::config::POSITION_COUNT;
use crate::hal::{LedOutputs, SwitchInputs};
use crate::types::Position;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Switches wired to ground with pull-ups: a low line means pressed.
pub struct ActiveLowSwitches<P> {
    pins: [P; POSITION_COUNT],
}

impl<P: InputPin> ActiveLowSwitches<P> {
    /// Creates the adapter. `pins[0]` is switch 1.
    pub fn new(pins: [P; POSITION_COUNT]) -> Self {
        Self { pins }
    }

    /// Returns the pins.
    pub fn release(self) -> [P; POSITION_COUNT] {
        self.pins
    }
}

impl<P: InputPin> SwitchInputs for ActiveLowSwitches<P> {
    fn is_active(&mut self, position: Position) -> bool {
        self.pins[position.index()]
            .is_low()
            .inspect_err(|_| {
                #[cfg(feature = "defmt")]
                defmt::warn!("switch {} read failed, treating as released", position);
            })
            .unwrap_or(false)
    }
}

/// Switches wired to the supply with pull-downs: a high line means pressed.
pub struct ActiveHighSwitches<P> {
    pins: [P; POSITION_COUNT],
}

impl<P: InputPin> ActiveHighSwitches<P> {
    /// Creates the adapter. `pins[0]` is switch 1.
    pub fn new(pins: [P; POSITION_COUNT]) -> Self {
        Self { pins }
    }

    /// Returns the pins.
    pub fn release(self) -> [P; POSITION_COUNT] {
        self.pins
    }
}

impl<P: InputPin> SwitchInputs for ActiveHighSwitches<P> {
    fn is_active(&mut self, position: Position) -> bool {
        self.pins[position.index()]
            .is_high()
            .inspect_err(|_| {
                #[cfg(feature = "defmt")]
                defmt::warn!("switch {} read failed, treating as released", position);
            })
            .unwrap_or(false)
    }
}

/// LEDs driven push-pull, a high line lights the LED.
pub struct PinLeds<P> {
    pins: [P; POSITION_COUNT],
}

impl<P: OutputPin> PinLeds<P> {
    /// Creates the adapter. `pins[0]` is LED 1.
    pub fn new(pins: [P; POSITION_COUNT]) -> Self {
        Self { pins }
    }

    /// Returns the pins.
    pub fn release(self) -> [P; POSITION_COUNT] {
        self.pins
    }
}

impl<P: OutputPin> LedOutputs for PinLeds<P> {
    fn set_led(&mut self, position: Position, lit: bool) {
        if self.pins[position.index()].set_state(PinState::from(lit)).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("LED {} write failed", position);
        }
    }
}
