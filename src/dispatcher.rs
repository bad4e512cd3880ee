//! Tick dispatcher with state management and output control.
//!
//! Provides [`TickDispatcher`], the single entry point called once per timer
//! tick. It plays the startup animation, then hands over for good to the
//! debounce resolver and output driver.

use crate::animation::{AnimationSequencer, AnimationStep};
use crate::config::{Config, ConfigError};
use crate::debounce::DebounceResolver;
use crate::hal::{AnalogOutput, LedOutputs, SwitchInputs};
use crate::output::OutputDriver;
use crate::time::TickRate;
use crate::types::{LedPattern, Position};

/// The current state of a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatcherState {
    /// Startup animation playing. Analog output held at zero.
    Animating,
    /// Switches resolved every tick. Never left once entered.
    SteadyState,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Animation frame shown with this LED lit.
    Animating(Position),
    /// Steady-state outputs written for this selected position.
    Steady(Position),
}

/// Drives the selector hardware from a periodic tick.
///
/// Owns the hardware handles, the tick counter and all persistent state.
/// `tick` takes `&mut self`, so a tick always runs to completion before the
/// next one can start.
///
/// # Type Parameters
/// * `S` - Switch input implementation
/// * `L` - LED output implementation
/// * `A` - Analog output implementation
pub struct TickDispatcher<S: SwitchInputs, L: LedOutputs, A: AnalogOutput> {
    switches: S,
    leds: L,
    analog: A,
    ticks: u32,
    tick_rate: TickRate,
    state: DispatcherState,
    animation: AnimationSequencer,
    resolver: DebounceResolver,
    driver: OutputDriver,
}

impl<S: SwitchInputs, L: LedOutputs, A: AnalogOutput> TickDispatcher<S, L, A> {
    /// Creates a dispatcher with the reference configuration.
    ///
    /// Turns all LEDs off and sets the analog output to zero.
    pub fn new(switches: S, leds: L, analog: A) -> Self {
        Self::build(Config::DEFAULT, switches, leds, analog)
    }

    /// Creates a dispatcher from a custom configuration.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] reported by [`Config::validate`].
    pub fn with_config(config: Config, switches: S, leds: L, analog: A) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        Ok(Self::build(config, switches, leds, analog))
    }

    fn build(config: Config, switches: S, mut leds: L, mut analog: A) -> Self {
        leds.show(LedPattern::OFF);
        analog.set_code(0);

        Self {
            switches,
            leds,
            analog,
            ticks: 0,
            tick_rate: config.tick_rate,
            state: DispatcherState::Animating,
            animation: AnimationSequencer::with_steps(config.step_ticks, config.animation_runs),
            resolver: DebounceResolver::with_limit(config.debounce_limit, config.arbitration),
            driver: OutputDriver::new(A::MAX_CODE),
        }
    }

    /// Runs one tick. Call this from the periodic timer, once per period.
    ///
    /// The tick that ends the animation already runs the steady-state path,
    /// so no tick is skipped at the handover.
    pub fn tick(&mut self) -> TickOutcome {
        let elapsed = self.ticks;
        self.ticks = self.ticks.wrapping_add(1);

        if self.state == DispatcherState::Animating {
            match self.animation.advance(elapsed) {
                AnimationStep::Lit(position) => {
                    self.leds.show(LedPattern::single(position));
                    return TickOutcome::Animating(position);
                }
                AnimationStep::Done => {
                    #[cfg(feature = "defmt")]
                    defmt::info!("startup animation finished after {} ticks", elapsed);
                    self.state = DispatcherState::SteadyState;
                }
            }
        }

        let switches = self.switches.sample();
        let position = self.resolver.resolve(switches);
        let output = self.driver.drive(position);

        self.leds.show(output.leds);
        self.analog.set_code(output.code);

        TickOutcome::Steady(position)
    }

    /// Ticks seen since construction.
    #[inline]
    pub fn tick_count(&self) -> u32 {
        self.ticks
    }

    /// Rate this dispatcher expects to be ticked at.
    #[inline]
    pub fn tick_rate(&self) -> TickRate {
        self.tick_rate
    }

    /// Time since construction, assuming ticks arrive at [`Self::tick_rate`].
    pub fn elapsed_millis(&self) -> u64 {
        self.tick_rate.ticks_to_millis(self.ticks)
    }

    /// Returns the current state of the dispatcher.
    #[inline]
    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Returns true while the startup animation plays.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state == DispatcherState::Animating
    }

    /// Currently selected position. Position 1 until a switch saturates.
    #[inline]
    pub fn selected_position(&self) -> Position {
        self.resolver.selected()
    }

    /// Confidence counter of `position`.
    #[inline]
    pub fn confidence(&self, position: Position) -> u8 {
        self.resolver.confidence(position)
    }

    /// Animation length in ticks.
    #[inline]
    pub fn animation_ticks(&self) -> u32 {
        self.animation.total_ticks()
    }

    /// Output mapping in use.
    #[inline]
    pub fn driver(&self) -> &OutputDriver {
        &self.driver
    }

    /// Switch inputs.
    pub fn switches(&self) -> &S {
        &self.switches
    }

    /// Mutable access to the switch inputs.
    pub fn switches_mut(&mut self) -> &mut S {
        &mut self.switches
    }

    /// LED outputs.
    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Analog output.
    pub fn analog(&self) -> &A {
        &self.analog
    }

    /// Consumes the dispatcher and returns the hardware.
    pub fn release(self) -> (S, L, A) {
        (self.switches, self.leds, self.analog)
    }
}
