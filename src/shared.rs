//! Interrupt-safe home for a [`TickDispatcher`].
//!
//! Firmware builds the dispatcher in `main`, moves it into a `static`
//! [`SharedDispatcher`] and calls [`SharedDispatcher::tick`] from the timer
//! interrupt. Every tick runs inside a critical section, so ticks from any
//! context are serialized.
//!
//! ```ignore
//! static DISPATCHER: SharedDispatcher<Switches, Leds, Dac> = SharedDispatcher::new();
//!
//! #[exception]
//! fn SysTick() {
//!     let _ = DISPATCHER.tick();
//! }
//! ```

use core::cell::RefCell;
use critical_section::Mutex;

use crate::dispatcher::{TickDispatcher, TickOutcome};
use crate::hal::{AnalogOutput, LedOutputs, SwitchInputs};

/// Errors from the shared dispatcher slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SharedError {
    /// No dispatcher installed yet.
    NotInstalled,
    /// A dispatcher is already installed.
    AlreadyInstalled,
    /// Called while another call on the same slot is still running.
    Busy,
}

impl core::fmt::Display for SharedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SharedError::NotInstalled => write!(f, "no dispatcher installed"),
            SharedError::AlreadyInstalled => write!(f, "dispatcher already installed"),
            SharedError::Busy => write!(f, "dispatcher is busy (re-entrant call)"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SharedError {}

/// A dispatcher slot that can live in a `static`.
pub struct SharedDispatcher<S: SwitchInputs, L: LedOutputs, A: AnalogOutput> {
    inner: Mutex<RefCell<Option<TickDispatcher<S, L, A>>>>,
}

impl<S: SwitchInputs, L: LedOutputs, A: AnalogOutput> SharedDispatcher<S, L, A> {
    /// Creates an empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Installs `dispatcher`.
    ///
    /// # Errors
    /// * `AlreadyInstalled` - The slot already holds a dispatcher; the new one
    ///   is dropped
    /// * `Busy` - Called from inside [`Self::with`]
    pub fn install(&self, dispatcher: TickDispatcher<S, L, A>) -> Result<(), SharedError> {
        critical_section::with(|cs| {
            let mut slot = self
                .inner
                .borrow(cs)
                .try_borrow_mut()
                .map_err(|_| SharedError::Busy)?;
            if slot.is_some() {
                return Err(SharedError::AlreadyInstalled);
            }
            *slot = Some(dispatcher);
            Ok(())
        })
    }

    /// Runs one tick of the installed dispatcher.
    pub fn tick(&self) -> Result<TickOutcome, SharedError> {
        self.with(|dispatcher| dispatcher.tick())
    }

    /// Runs `f` on the installed dispatcher inside a critical section.
    ///
    /// Keep `f` short: interrupts stay masked while it runs.
    ///
    /// # Errors
    /// * `NotInstalled` - Nothing installed yet
    /// * `Busy` - Nested call on the same slot
    pub fn with<R>(&self, f: impl FnOnce(&mut TickDispatcher<S, L, A>) -> R) -> Result<R, SharedError> {
        critical_section::with(|cs| {
            let mut slot = self
                .inner
                .borrow(cs)
                .try_borrow_mut()
                .map_err(|_| SharedError::Busy)?;
            let dispatcher = slot.as_mut().ok_or(SharedError::NotInstalled)?;
            Ok(f(dispatcher))
        })
    }

    /// Removes and returns the installed dispatcher.
    pub fn take(&self) -> Result<TickDispatcher<S, L, A>, SharedError> {
        critical_section::with(|cs| {
            let mut slot = self
                .inner
                .borrow(cs)
                .try_borrow_mut()
                .map_err(|_| SharedError::Busy)?;
            slot.take().ok_or(SharedError::NotInstalled)
        })
    }

    /// Returns true if a dispatcher is installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| {
            self.inner
                .borrow(cs)
                .try_borrow()
                .map(|slot| slot.is_some())
                .unwrap_or(true)
        })
    }
}

impl<S: SwitchInputs, L: LedOutputs, A: AnalogOutput> Default for SharedDispatcher<S, L, A> {
    fn default() -> Self {
        Self::new()
    }
}
