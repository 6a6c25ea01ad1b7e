#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rcs620s::test_support::{self, SAMPLE_IDM};
use rcs620s::{Error, SystemCode};
use std::time::Duration;

fn push_echo(code: u8, trailer: u8) -> Vec<u8> {
    let mut resp = vec![code];
    resp.extend_from_slice(&SAMPLE_IDM);
    resp.push(trailer);
    resp
}

#[test]
fn push_runs_both_steps_and_settles() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05];
    let (mut dev, clock) = fixtures::initialized_device_with_clock(vec![
        test_support::felica_found_chunk(),
        test_support::thru_chunk(&push_echo(0xB1, data.len() as u8)),
        test_support::thru_chunk(&push_echo(0xA5, 0x00)),
    ]);
    dev.poll_felica(SystemCode::ANY).unwrap();

    let before = clock.elapsed();
    dev.push(&data).unwrap();
    // the card gets a full second to act on the pushed data
    assert!(clock.elapsed() - before >= Duration::from_secs(1));
}

#[test]
fn push_without_felica_card_is_no_card() {
    let uid = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    let mut dev = fixtures::initialized_device(vec![test_support::type_a_ultralight_chunk(&uid)]);
    dev.poll_type_a().unwrap();

    assert!(matches!(dev.push(&[0x01]), Err(Error::NoCardSelected)));
}

#[test]
fn push_data_length_guards() {
    let mut dev = fixtures::initialized_device(vec![test_support::felica_found_chunk()]);
    dev.poll_felica(SystemCode::ANY).unwrap();

    assert!(matches!(dev.push(&[]), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        dev.push(&[0u8; 225]),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn bad_push_echo_is_unexpected_response() {
    // card echoes a wrong IDm back
    let mut wrong = vec![0xB1];
    wrong.extend_from_slice(&[0xFF; 8]);
    wrong.push(0x01);
    let mut dev = fixtures::initialized_device(vec![
        test_support::felica_found_chunk(),
        test_support::thru_chunk(&wrong),
    ]);
    dev.poll_felica(SystemCode::ANY).unwrap();

    assert!(matches!(
        dev.push(&[0x01]),
        Err(Error::UnexpectedResponse { .. })
    ));
}
