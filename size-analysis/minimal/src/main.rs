#![no_std]
#![no_main]

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use panic_halt as _;
use sixpos_switch::config::{DAC_MAX, REFERENCE_SYSCLK_HZ};
use sixpos_switch::{
    AnalogOutput, LedOutputs, Position, SharedDispatcher, SwitchInputs, TickDispatcher,
};

// ============================================================================
// Minimal Hardware
// ============================================================================

/// Switch bank that reads nothing, for measuring library overhead
pub struct MinimalSwitches;

impl SwitchInputs for MinimalSwitches {
    fn is_active(&mut self, position: Position) -> bool {
        core::hint::black_box(position.get()) == 0
    }
}

/// LED bank that drives nothing
pub struct MinimalLeds;

impl LedOutputs for MinimalLeds {
    fn set_led(&mut self, position: Position, lit: bool) {
        core::hint::black_box((position, lit));
    }
}

/// 14-bit DAC that drives nothing
pub struct MinimalDac;

impl AnalogOutput for MinimalDac {
    const MAX_CODE: u16 = DAC_MAX;

    fn set_code(&mut self, code: u16) {
        core::hint::black_box(code);
    }
}

static DISPATCHER: SharedDispatcher<MinimalSwitches, MinimalLeds, MinimalDac> =
    SharedDispatcher::new();

// ============================================================================
// Tick Source
// ============================================================================

#[exception]
fn SysTick() {
    let _ = DISPATCHER.tick();
}

#[entry]
fn main() -> ! {
    let mut cp = match cortex_m::Peripherals::take() {
        Some(cp) => cp,
        None => loop {
            cortex_m::asm::nop();
        },
    };

    let dispatcher = TickDispatcher::new(MinimalSwitches, MinimalLeds, MinimalDac);
    let tick_rate = dispatcher.tick_rate();
    let _ = DISPATCHER.install(dispatcher);

    // SysTick is 24 bits wide, so the reference clock always fits.
    let reload = REFERENCE_SYSCLK_HZ / tick_rate.hz() - 1;
    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(reload);
    cp.SYST.clear_current();
    cp.SYST.enable_counter();
    cp.SYST.enable_interrupt();

    loop {
        cortex_m::asm::wfi();
    }
}
