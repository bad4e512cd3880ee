//! Core value types shared by the sequencer, resolver and driver.

use crate::config::POSITION_COUNT;
use heapless::Vec;

/// One of the six switch positions, numbered 1 to 6.
///
/// Position `n` corresponds to switch `n` and LED `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(u8);

impl Position {
    /// Position 1, the power-on default.
    pub const FIRST: Position = Position(1);

    /// Position 6.
    pub const LAST: Position = Position(POSITION_COUNT as u8);

    /// All positions in evaluation order.
    pub const ALL: [Position; POSITION_COUNT] = [
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
    ];

    /// Creates a position from its number, `None` outside 1..=6.
    #[inline]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= POSITION_COUNT {
            Some(Position(number))
        } else {
            None
        }
    }

    /// Creates a position from a zero-based index.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < POSITION_COUNT {
            Some(Position(index as u8 + 1))
        } else {
            None
        }
    }

    /// Returns the position number (1..=6).
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based index (0..=5).
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::FIRST
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Position::new(number).ok_or(PositionError(number))
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw value that is not a valid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionError(pub u8);

impl core::fmt::Display for PositionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "position {} is outside 1..={}", self.0, POSITION_COUNT)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PositionError {}

/// Raw switch readings for one tick. `true` means pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchStates([bool; POSITION_COUNT]);

impl SwitchStates {
    /// No switch pressed.
    pub const RELEASED: SwitchStates = SwitchStates([false; POSITION_COUNT]);

    /// Creates readings from one flag per position.
    #[inline]
    pub const fn new(active: [bool; POSITION_COUNT]) -> Self {
        SwitchStates(active)
    }

    /// Readings with only `position` pressed.
    pub const fn only(position: Position) -> Self {
        let mut active = [false; POSITION_COUNT];
        active[position.index()] = true;
        SwitchStates(active)
    }

    /// Returns a copy with `position` pressed as well.
    #[must_use]
    pub const fn with(mut self, position: Position) -> Self {
        self.0[position.index()] = true;
        self
    }

    /// Returns true if the switch at `position` is pressed.
    #[inline]
    pub const fn is_active(&self, position: Position) -> bool {
        self.0[position.index()]
    }

    /// Sets the reading for `position`.
    #[inline]
    pub fn set(&mut self, position: Position, active: bool) {
        self.0[position.index()] = active;
    }

    /// Pressed positions in ascending order.
    pub fn active_positions(&self) -> Vec<Position, POSITION_COUNT> {
        Position::ALL
            .into_iter()
            .filter(|&position| self.is_active(position))
            .collect()
    }

    /// Number of pressed switches.
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&active| active).count()
    }
}

impl From<[bool; POSITION_COUNT]> for SwitchStates {
    fn from(active: [bool; POSITION_COUNT]) -> Self {
        SwitchStates(active)
    }
}

/// Set of lit LEDs, bit `n - 1` for LED `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedPattern(u8);

impl LedPattern {
    /// All LEDs off.
    pub const OFF: LedPattern = LedPattern(0);

    /// Only the LED at `position` lit.
    #[inline]
    pub const fn single(position: Position) -> Self {
        LedPattern(1 << position.index())
    }

    /// Returns a copy with the LED at `position` lit as well.
    #[must_use]
    pub const fn with(self, position: Position) -> Self {
        LedPattern(self.0 | (1 << position.index()))
    }

    /// Lights or clears the LED at `position`.
    #[inline]
    pub fn set(&mut self, position: Position, lit: bool) {
        let mask = 1 << position.index();
        if lit {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Returns true if the LED at `position` is lit.
    #[inline]
    pub const fn is_lit(&self, position: Position) -> bool {
        self.0 & (1 << position.index()) != 0
    }

    /// Number of lit LEDs.
    #[inline]
    pub const fn lit_count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Lit LEDs in ascending order.
    pub fn lit_positions(&self) -> Vec<Position, POSITION_COUNT> {
        Position::ALL
            .into_iter()
            .filter(|&position| self.is_lit(position))
            .collect()
    }

    /// Raw bit mask.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }
}
