#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rcs620s::test_support;
use rcs620s::{PiccType, PollOutcome, SystemCode};

#[test]
fn felica_poll_records_idm_and_pmm() {
    let mut dev = fixtures::initialized_device(vec![test_support::felica_found_chunk()]);

    let outcome = dev.poll_felica(SystemCode::ANY).unwrap();
    assert_eq!(outcome, PollOutcome::Found(PiccType::Felica));
    assert_eq!(dev.picc_type(), PiccType::Felica);
    assert_eq!(dev.id(), fixtures::sample_idm_bytes());
    assert_eq!(dev.pmm(), &fixtures::sample_pmm_bytes());
    assert_eq!(dev.id_length(), 8);
}

#[test]
fn type_a_ultralight_poll_records_uid() {
    let uid = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    let mut dev = fixtures::initialized_device(vec![test_support::type_a_ultralight_chunk(&uid)]);

    let outcome = dev.poll_type_a().unwrap();
    assert_eq!(outcome, PollOutcome::Found(PiccType::TypeAUltralight));
    assert_eq!(dev.id_length(), 7);
    assert_eq!(dev.id(), &uid);
}

#[test]
fn type_b_poll_records_pupi() {
    let mut payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x50];
    payload.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]); // pupi
    payload.extend_from_slice(&[0x11, 0x22, 0x33, 0x44]); // application data
    payload.extend_from_slice(&[0x00, 0x00, 0x81]); // protocol info
    let mut dev = fixtures::initialized_device(vec![test_support::ack_and_frame(&payload)]);

    let outcome = dev.poll_type_b().unwrap();
    assert_eq!(outcome, PollOutcome::Found(PiccType::TypeB));
    assert_eq!(dev.id_length(), 4);
    assert_eq!(dev.id(), &[0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn no_target_keeps_previous_session() {
    let mut dev = fixtures::initialized_device(vec![
        test_support::felica_found_chunk(),
        test_support::no_target_chunk(),
    ]);

    assert!(dev.poll_felica(SystemCode::ANY).unwrap().is_found());
    let outcome = dev.poll_felica(SystemCode::ANY).unwrap();
    assert_eq!(outcome, PollOutcome::NotFound);
    // the last successful poll's identifiers stay available
    assert_eq!(dev.picc_type(), PiccType::Felica);
    assert_eq!(dev.id(), fixtures::sample_idm_bytes());
}

#[test]
fn malformed_polling_body_counts_as_no_card() {
    // target present flag set but wrong descriptor length byte
    let payload = vec![0xD5, 0x4B, 0x01, 0x01, 0x99, 0x01, 0x00, 0x00];
    let mut dev = fixtures::initialized_device(vec![test_support::ack_and_frame(&payload)]);

    let outcome = dev.poll_felica(SystemCode::ANY).unwrap();
    assert_eq!(outcome, PollOutcome::NotFound);
    assert_eq!(dev.picc_type(), PiccType::Unknown);
}

#[test]
fn four_byte_uid_classic_family() {
    let payload = vec![
        0xD5, 0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0xAA, 0xBB, 0xCC, 0xDD,
    ];
    let mut dev = fixtures::initialized_device(vec![test_support::ack_and_frame(&payload)]);

    let outcome = dev.poll_type_a().unwrap();
    assert_eq!(outcome, PollOutcome::Found(PiccType::TypeAMifare));
    assert_eq!(dev.id_length(), 4);
}
