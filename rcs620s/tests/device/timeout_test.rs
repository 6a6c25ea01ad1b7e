#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rcs620s::{Error, SystemCode};
use std::time::Duration;

#[test]
fn silent_reader_times_out_with_default_budget() {
    let (mut dev, clock) = fixtures::initialized_device_with_clock(vec![]);
    let before = clock.elapsed();

    let err = dev.poll_felica(SystemCode::ANY).unwrap_err();
    assert!(matches!(err, Error::Timeout));

    let spent = clock.elapsed() - before;
    assert!(spent >= dev.timeout());
    // overshoot is bounded by one read slice plus the cancel settle wait
    assert!(spent <= dev.timeout() + Duration::from_millis(20));
}

#[test]
fn shorter_budget_is_respected() {
    let (mut dev, clock) = fixtures::initialized_device_with_clock(vec![]);
    dev.set_timeout(Duration::from_millis(50));
    let before = clock.elapsed();

    assert!(matches!(
        dev.poll_type_a().unwrap_err(),
        Error::Timeout
    ));

    let spent = clock.elapsed() - before;
    assert!(spent >= Duration::from_millis(50));
    assert!(spent <= Duration::from_millis(70));
}

#[test]
fn timed_out_exchange_leaves_session_untouched() {
    let (mut dev, _clock) = fixtures::initialized_device_with_clock(vec![]);
    let _ = dev.poll_felica(SystemCode::ANY);
    assert_eq!(dev.id_length(), 0);
}
