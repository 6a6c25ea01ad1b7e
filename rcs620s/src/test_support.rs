//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockChannel setup so tests across the
//! crate and the tests/ directory can reuse the same scripted exchanges.
#![allow(dead_code)]

use crate::device::{Initialized, Rcs620s, Uninitialized};
use crate::protocol::Frame;
use crate::transport::{ByteChannel, MockChannel, VirtualClock};
use crate::{utils, Result};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Sample FeliCa IDm used throughout the tests.
pub const SAMPLE_IDM: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// Sample FeliCa PMm used throughout the tests.
pub const SAMPLE_PMM: [u8; 8] = [0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10];

/// ACK pattern followed by a complete frame carrying `payload`, as one read
/// chunk — what the reader emits for one successful exchange.
#[doc(hidden)]
pub fn ack_and_frame(payload: &[u8]) -> Vec<u8> {
    let mut chunk = crate::constants::ACK_FRAME.to_vec();
    chunk.extend_from_slice(&Frame::encode(payload).expect("fixture payload"));
    chunk
}

/// Empty-body RFConfiguration response chunk (init steps, rf_off).
#[doc(hidden)]
pub fn rf_config_ok_chunk() -> Vec<u8> {
    ack_and_frame(&[0xD5, 0x33])
}

/// Polling response chunk carrying a FeliCa target with the sample IDm/PMm.
#[doc(hidden)]
pub fn felica_found_chunk() -> Vec<u8> {
    let mut payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x14, 0x01];
    payload.extend_from_slice(&SAMPLE_IDM);
    payload.extend_from_slice(&SAMPLE_PMM);
    ack_and_frame(&payload)
}

/// Polling response chunk with zero targets ("no card present"); the shape
/// is shared by all three families.
#[doc(hidden)]
pub fn no_target_chunk() -> Vec<u8> {
    ack_and_frame(&[0xD5, 0x4B, 0x00])
}

/// Type A polling response chunk for a 7-byte-UID Ultralight target.
#[doc(hidden)]
pub fn type_a_ultralight_chunk(uid: &[u8; 7]) -> Vec<u8> {
    let mut payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x00, 0x44, 0x00, 0x07];
    payload.extend_from_slice(uid);
    ack_and_frame(&payload)
}

/// CommunicateThruEX response chunk wrapping a raw card response.
#[doc(hidden)]
pub fn thru_chunk(card_response: &[u8]) -> Vec<u8> {
    let mut payload = vec![0xD5, 0xA1, 0x00, (card_response.len() + 1) as u8];
    payload.extend_from_slice(card_response);
    ack_and_frame(&payload)
}

/// Capability-container read chunk for an Ultralight tag (page 3 first,
/// `cc_size` selects the sub-variant: 0x12/0x3E/0x6F).
#[doc(hidden)]
pub fn capability_chunk(cc_size: u8) -> Vec<u8> {
    let mut page = vec![0xE1, 0x10, cc_size, 0x00];
    page.extend_from_slice(&[0u8; 12]);
    thru_chunk(&page)
}

/// Build an uninitialized device over the given channel and shared virtual
/// clock, with the default timeout budget.
#[doc(hidden)]
pub fn device_with(channel: MockChannel, clock: VirtualClock) -> Rcs620s<Uninitialized> {
    Rcs620s::from_parts(
        Box::new(channel),
        Box::new(clock),
        utils::default_timeout(),
    )
}

/// Convenience: an initialized device whose channel is pre-seeded with the
/// three init responses followed by `chunks`.
#[doc(hidden)]
pub fn initialized_device(chunks: Vec<Vec<u8>>) -> Rcs620s<Initialized> {
    let clock = VirtualClock::new();
    let mut channel = MockChannel::with_clock(clock.clone());
    for _ in 0..3 {
        channel.push_read(rf_config_ok_chunk());
    }
    for chunk in chunks {
        channel.push_read(chunk);
    }
    device_with(channel, clock)
        .init_device()
        .expect("mock init")
}

/// ByteChannel wrapper sharing a MockChannel so tests can inspect writes
/// after the device has taken ownership.
#[doc(hidden)]
#[derive(Clone)]
pub struct SharedChannel(pub Rc<RefCell<MockChannel>>);

impl SharedChannel {
    /// Wrap a mock channel for shared inspection.
    pub fn new(channel: MockChannel) -> Self {
        Self(Rc::new(RefCell::new(channel)))
    }
}

impl ByteChannel for SharedChannel {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.0.borrow_mut().write(data)
    }

    fn read_with_deadline(&mut self, max_len: usize, wait: Duration) -> Result<Vec<u8>> {
        self.0.borrow_mut().read_with_deadline(max_len, wait)
    }

    fn discard_input(&mut self) -> Result<()> {
        self.0.borrow_mut().discard_input()
    }
}
