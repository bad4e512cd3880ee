//! Hardware abstraction traits.
//!
//! The core never touches registers. Implement these traits for your board
//! (GPIO, port latches, DAC, etc.) or use the `embedded-hal` adapters in
//! [`crate::pins`].

use crate::types::{LedPattern, Position, SwitchStates};

/// Six independently readable switch inputs.
pub trait SwitchInputs {
    /// Returns true if the switch at `position` is currently pressed.
    ///
    /// Polarity is the implementation's concern: an active-low line reads as
    /// pressed when low. Handle any hardware errors internally - this method
    /// cannot fail.
    fn is_active(&mut self, position: Position) -> bool;

    /// Samples all six switches in position order.
    fn sample(&mut self) -> SwitchStates {
        let mut states = SwitchStates::RELEASED;
        for position in Position::ALL {
            states.set(position, self.is_active(position));
        }
        states
    }
}

/// Six independently settable status LEDs.
pub trait LedOutputs {
    /// Turns the LED at `position` on or off.
    fn set_led(&mut self, position: Position, lit: bool);

    /// Writes a whole pattern, one LED at a time in position order.
    fn show(&mut self, pattern: LedPattern) {
        for position in Position::ALL {
            self.set_led(position, pattern.is_lit(position));
        }
    }
}

/// A single analog output channel driven by an integer code.
pub trait AnalogOutput {
    /// Full-scale code of the device.
    const MAX_CODE: u16;

    /// Sets the output code. Callers never pass more than [`Self::MAX_CODE`].
    fn set_code(&mut self, code: u16);
}
