#[path = "../common/mod.rs"]
mod common;

use rcs620s::test_support;
use rcs620s::transport::{MockChannel, VirtualClock};
use rcs620s::{DeviceBuilder, Error};

#[test]
fn builder_init_yields_working_device() {
    let clock = VirtualClock::new();
    let mut channel = MockChannel::with_clock(clock.clone());
    for _ in 0..3 {
        channel.push_read(test_support::rf_config_ok_chunk());
    }
    channel.push_read(test_support::felica_found_chunk());

    let device = DeviceBuilder::new()
        .with_channel(Box::new(channel))
        .with_clock(Box::new(clock))
        .build_uninitialized()
        .unwrap();
    let mut device = device.init_device().unwrap();

    let outcome = device.poll_felica(Default::default()).unwrap();
    assert!(outcome.is_found());
}

#[test]
fn builder_requires_a_channel() {
    assert!(matches!(
        DeviceBuilder::new().build_uninitialized(),
        Err(Error::DeviceNotFound)
    ));
}

#[test]
fn failed_init_does_not_yield_a_device() {
    // silent reader: all three init exchanges would time out on the first
    let clock = VirtualClock::new();
    let channel = MockChannel::with_clock(clock.clone());
    let device = test_support::device_with(channel, clock);
    assert!(matches!(device.init_device(), Err(Error::Timeout)));
}

#[test]
fn rf_off_twice_is_fine() {
    let mut device = common::fixtures::initialized_device(vec![
        test_support::rf_config_ok_chunk(),
        test_support::rf_config_ok_chunk(),
    ]);
    device.rf_off().unwrap();
    device.rf_off().unwrap();
}
