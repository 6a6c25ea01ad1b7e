// fixtures.rs — commonly used payloads/frames and scripted devices
#![allow(dead_code)]

use rcs620s::protocol::Frame;
use rcs620s::test_support;
use rcs620s::transport::{MockChannel, VirtualClock};
use rcs620s::{Initialized, Rcs620s};

pub fn sample_idm_bytes() -> [u8; 8] {
    test_support::SAMPLE_IDM
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    test_support::SAMPLE_PMM
}

pub fn felica_polling_payload() -> Vec<u8> {
    let mut payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x14, 0x01];
    payload.extend_from_slice(&sample_idm_bytes());
    payload.extend_from_slice(&sample_pmm_bytes());
    payload
}

pub fn felica_polling_frame() -> Vec<u8> {
    Frame::encode(&felica_polling_payload()).unwrap()
}

/// Initialized device over a scripted channel; `chunks` are served after
/// the three init exchanges.
pub fn initialized_device(chunks: Vec<Vec<u8>>) -> Rcs620s<Initialized> {
    test_support::initialized_device(chunks)
}

/// Initialized device plus its shared virtual clock, for timing assertions.
pub fn initialized_device_with_clock(
    chunks: Vec<Vec<u8>>,
) -> (Rcs620s<Initialized>, VirtualClock) {
    let clock = VirtualClock::new();
    let mut channel = MockChannel::with_clock(clock.clone());
    for _ in 0..3 {
        channel.push_read(test_support::rf_config_ok_chunk());
    }
    for chunk in chunks {
        channel.push_read(chunk);
    }
    let dev = test_support::device_with(channel, clock.clone())
        .init_device()
        .expect("mock init");
    (dev, clock)
}
