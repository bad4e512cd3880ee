//! Integration tests for SharedDispatcher

mod common;
use common::*;

use std::sync::Arc;
use std::thread;

use sixpos_switch::{
    DAC_STEP, DEBOUNCE_LIMIT, Position, SharedDispatcher, SharedError, TickOutcome,
};

type Shared = SharedDispatcher<MockSwitches, MockLeds, MockDac>;

static GLOBAL: Shared = SharedDispatcher::new();

#[test]
fn tick_before_install_fails() {
    let shared = Shared::new();
    assert_eq!(shared.tick(), Err(SharedError::NotInstalled));
    assert!(!shared.is_installed());
    assert!(matches!(shared.take(), Err(SharedError::NotInstalled)));
}

#[test]
fn install_once() {
    let shared = Shared::new();
    assert_eq!(shared.install(mock_dispatcher()), Ok(()));
    assert!(shared.is_installed());
    assert_eq!(
        shared.install(mock_dispatcher()),
        Err(SharedError::AlreadyInstalled)
    );
}

#[test]
fn ticks_reach_installed_dispatcher() {
    let shared = Shared::new();
    shared.install(mock_dispatcher()).unwrap();

    assert_eq!(shared.tick(), Ok(TickOutcome::Animating(Position::FIRST)));
    assert_eq!(shared.with(|dispatcher| dispatcher.tick_count()), Ok(1));

    let dispatcher = shared.take().unwrap();
    assert_eq!(dispatcher.tick_count(), 1);
    assert!(!shared.is_installed());
}

#[test]
fn nested_tick_reports_busy() {
    let shared = Shared::new();
    shared.install(mock_dispatcher()).unwrap();

    let nested = shared.with(|_| shared.tick());
    assert_eq!(nested, Ok(Err(SharedError::Busy)));

    let nested_install = shared.with(|_| shared.install(mock_dispatcher()));
    assert_eq!(nested_install, Ok(Err(SharedError::Busy)));

    // The outer call still completed and the slot is usable again.
    assert!(shared.tick().is_ok());
}

#[test]
fn ticks_from_several_threads_are_serialized() {
    let shared = Arc::new(Shared::new());
    shared.install(mock_dispatcher()).unwrap();

    let animation_ticks = shared.with(|d| d.animation_ticks()).unwrap();
    let per_thread = 1000;
    let threads = 4;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..per_thread {
                    shared.tick().unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let total = shared.with(|d| d.tick_count()).unwrap();
    assert_eq!(total, per_thread * threads);
    assert!(total > animation_ticks);
}

#[test]
fn static_slot_drives_selection() {
    GLOBAL.install(mock_dispatcher()).unwrap();

    GLOBAL
        .with(|dispatcher| finish_animation(dispatcher))
        .unwrap();
    GLOBAL
        .with(|dispatcher| dispatcher.switches_mut().press(pos(3)))
        .unwrap();

    let mut last = None;
    for _ in 0..DEBOUNCE_LIMIT {
        last = Some(GLOBAL.tick().unwrap());
    }
    assert_eq!(last, Some(TickOutcome::Steady(pos(3))));

    let code = GLOBAL.with(|dispatcher| dispatcher.analog().code()).unwrap();
    assert_eq!(code, 2 * DAC_STEP);
}
