//! Shared test infrastructure for sixpos-switch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use sixpos_switch::{
    AnalogOutput, DAC_MAX, LedOutputs, LedPattern, Position, SwitchInputs, SwitchStates,
    TickDispatcher,
};

// ============================================================================
// Mock Switches
// ============================================================================

/// Switch bank whose readings are set directly by the test
#[derive(Default)]
pub struct MockSwitches {
    states: SwitchStates,
    reads: u32,
}

impl MockSwitches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, position: Position) {
        self.states.set(position, true);
    }

    pub fn release(&mut self, position: Position) {
        self.states.set(position, false);
    }

    pub fn release_all(&mut self) {
        self.states = SwitchStates::RELEASED;
    }

    /// Number of single-switch reads performed so far
    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl SwitchInputs for MockSwitches {
    fn is_active(&mut self, position: Position) -> bool {
        self.reads += 1;
        self.states.is_active(position)
    }
}

// ============================================================================
// Mock LEDs
// ============================================================================

/// LED bank that records every complete pattern written to it
pub struct MockLeds {
    current: LedPattern,
    writes: u32,
    history: heapless::Vec<LedPattern, 64>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            current: LedPattern::OFF,
            writes: 0,
            history: heapless::Vec::new(),
        }
    }

    pub fn pattern(&self) -> LedPattern {
        self.current
    }

    pub fn history(&self) -> &[LedPattern] {
        &self.history
    }

    /// Number of single-LED writes performed so far
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl LedOutputs for MockLeds {
    fn set_led(&mut self, position: Position, lit: bool) {
        self.writes += 1;
        self.current.set(position, lit);
    }

    fn show(&mut self, pattern: LedPattern) {
        for position in Position::ALL {
            self.set_led(position, pattern.is_lit(position));
        }
        let _ = self.history.push(pattern);
    }
}

// ============================================================================
// Mock DAC
// ============================================================================

/// 14-bit DAC that records the last code and the number of writes
#[derive(Default)]
pub struct MockDac {
    code: u16,
    writes: u32,
}

impl MockDac {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl AnalogOutput for MockDac {
    const MAX_CODE: u16 = DAC_MAX;

    fn set_code(&mut self, code: u16) {
        assert!(code <= Self::MAX_CODE, "code {} above full scale", code);
        self.code = code;
        self.writes += 1;
    }
}

/// 12-bit DAC for full-scale scaling tests
#[derive(Default)]
pub struct MockDac12 {
    pub code: u16,
}

impl AnalogOutput for MockDac12 {
    const MAX_CODE: u16 = 0x0FFF;

    fn set_code(&mut self, code: u16) {
        self.code = code;
    }
}

// ============================================================================
// Mock Pins
// ============================================================================

/// Input pin with a settable level
pub struct MockInputPin {
    pub high: bool,
}

impl ErrorType for MockInputPin {
    type Error = Infallible;
}

impl InputPin for MockInputPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

/// Output pin that remembers its level
#[derive(Default)]
pub struct MockOutputPin {
    pub high: bool,
}

impl ErrorType for MockOutputPin {
    type Error = Infallible;
}

impl OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

/// Pin whose every access fails
pub struct FaultyPin;

impl ErrorType for FaultyPin {
    type Error = ErrorKind;
}

impl InputPin for FaultyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }
}

impl OutputPin for FaultyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type MockDispatcher = TickDispatcher<MockSwitches, MockLeds, MockDac>;

pub fn pos(number: u8) -> Position {
    Position::new(number).unwrap()
}

pub fn mock_dispatcher() -> MockDispatcher {
    TickDispatcher::new(MockSwitches::new(), MockLeds::new(), MockDac::new())
}

/// Ticks until the startup animation is over; the next tick is steady state
pub fn finish_animation(dispatcher: &mut MockDispatcher) {
    while dispatcher.tick_count() < dispatcher.animation_ticks() {
        dispatcher.tick();
    }
}

/// Ticks `count` times
pub fn run_ticks<S, L, A>(dispatcher: &mut TickDispatcher<S, L, A>, count: u32)
where
    S: SwitchInputs,
    L: LedOutputs,
    A: AnalogOutput,
{
    for _ in 0..count {
        dispatcher.tick();
    }
}
