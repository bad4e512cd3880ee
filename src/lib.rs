#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TickDispatcher`**: Single entry point, call `tick()` once per timer period
//! - **`AnimationSequencer`**: Startup sweep (hold LED 1, then 1-2-3-4-5-6-5-4-3-2 bounces)
//! - **`DebounceResolver`**: Saturating confidence counters with sticky selection
//! - **`OutputDriver`**: Maps a position to one lit LED and a proportional analog code
//! - **`SwitchInputs`**, **`LedOutputs`**, **`AnalogOutput`**: Traits to implement for your hardware
//! - **`ActiveLowSwitches`**, **`PinLeds`**: Ready-made implementations over `embedded-hal` pins
//! - **`SharedDispatcher`**: Critical-section protected slot for ticking from an interrupt
//! - **`Config`**: Build-time timing and threshold values
//!
//! All timing is counted in ticks. The reference board ticks at 500 Hz, plays
//! a 2050-tick startup animation and selects a position after 10 consecutive
//! pressed ticks.

pub mod animation;
pub mod config;
pub mod debounce;
pub mod dispatcher;
pub mod hal;
pub mod output;
pub mod pins;
pub mod shared;
pub mod time;
pub mod types;

pub use animation::{AnimationSequencer, AnimationStep};
pub use config::{Config, ConfigError, DAC_MAX, DAC_STEP, DEBOUNCE_LIMIT, POSITION_COUNT};
pub use debounce::{Arbitration, DebounceResolver};
pub use dispatcher::{DispatcherState, TickDispatcher, TickOutcome};
pub use hal::{AnalogOutput, LedOutputs, SwitchInputs};
pub use output::{OutputDriver, SteadyOutput};
pub use pins::{ActiveHighSwitches, ActiveLowSwitches, PinLeds};
pub use shared::{SharedDispatcher, SharedError};
pub use time::TickRate;
pub use types::{LedPattern, Position, PositionError, SwitchStates};
