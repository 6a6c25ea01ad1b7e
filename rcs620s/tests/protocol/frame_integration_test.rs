#[path = "../common/mod.rs"]
mod common;

use rcs620s::protocol::Frame;
use rcs620s::Error;

#[test]
fn polling_frame_payload_matches_fixture() {
    let frame = common::fixtures::felica_polling_frame();
    let payload = Frame::decode(&frame).expect("frame decode");
    assert_eq!(payload, common::fixtures::felica_polling_payload());
}

#[test]
fn three_byte_scenario_roundtrip() {
    let frame = Frame::encode(&[0x00, 0xFF, 0x01]).unwrap();
    let payload = Frame::decode(&frame).unwrap();
    assert_eq!(payload, vec![0x00, 0xFF, 0x01]);
    assert_eq!(payload.len(), 3);
}

#[test]
fn max_extended_payload_roundtrips() {
    let payload: Vec<u8> = (0..265).map(|i| (i % 256) as u8).collect();
    let frame = Frame::encode(&payload).unwrap();
    assert_eq!(Frame::decode(&frame).unwrap(), payload);
}

#[test]
fn corrupted_fixture_fails_checksum() {
    let mut frame = common::fixtures::felica_polling_frame();
    frame[10] ^= 0x01;
    assert!(matches!(Frame::decode(&frame), Err(Error::Checksum { .. })));
}
