#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rcs620s::test_support;
use rcs620s::{Error, SystemCode};

const UID: [u8; 7] = [0x04, 0x5F, 0x01, 0x02, 0x03, 0x04, 0x05];

#[test]
fn card_command_returns_card_response() {
    let mut dev = fixtures::initialized_device(vec![
        test_support::felica_found_chunk(),
        test_support::thru_chunk(&[0x07, 0x01, 0x02, 0x03]),
    ]);
    dev.poll_felica(SystemCode::ANY).unwrap();

    let resp = dev.card_command(&[0x06, 0x00]).unwrap();
    assert_eq!(resp, vec![0x07, 0x01, 0x02, 0x03]);
}

#[test]
fn card_command_length_guards() {
    let mut dev = fixtures::initialized_device(vec![]);
    assert!(matches!(
        dev.card_command(&[]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        dev.card_command(&[0u8; 255]),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn card_status_surfaces_as_error() {
    let mut payload = vec![0xD5, 0xA1, 0x81];
    payload.push(0x01);
    let mut dev = fixtures::initialized_device(vec![
        test_support::felica_found_chunk(),
        test_support::ack_and_frame(&payload),
    ]);
    dev.poll_felica(SystemCode::ANY).unwrap();

    assert!(matches!(
        dev.card_command(&[0x06, 0x00]),
        Err(Error::Card { status: 0x81 })
    ));
}

#[test]
fn capability_probe_selects_variant_and_caches() {
    let mut dev = fixtures::initialized_device(vec![
        test_support::type_a_ultralight_chunk(&UID),
        test_support::capability_chunk(0x12), // NTAG213
    ]);
    dev.poll_type_a().unwrap();

    assert_eq!(dev.total_pages_for_detected_tag(), 45);
    // second call answers from the cached variant, no further exchange
    assert_eq!(dev.total_pages_for_detected_tag(), 45);
}

#[test]
fn larger_tags_report_their_capacity() {
    for (cc, pages) in [(0x3Eu8, 135u16), (0x6F, 231)] {
        let mut dev = fixtures::initialized_device(vec![
            test_support::type_a_ultralight_chunk(&UID),
            test_support::capability_chunk(cc),
        ]);
        dev.poll_type_a().unwrap();
        assert_eq!(dev.total_pages_for_detected_tag(), pages);
    }
}

#[test]
fn unknown_capability_size_reports_zero_pages() {
    let mut dev = fixtures::initialized_device(vec![
        test_support::type_a_ultralight_chunk(&UID),
        test_support::capability_chunk(0x44),
    ]);
    dev.poll_type_a().unwrap();
    assert_eq!(dev.total_pages_for_detected_tag(), 0);
}

#[test]
fn non_ultralight_tag_reports_zero_pages() {
    let mut dev = fixtures::initialized_device(vec![test_support::felica_found_chunk()]);
    dev.poll_felica(SystemCode::ANY).unwrap();
    assert_eq!(dev.total_pages_for_detected_tag(), 0);
}

#[test]
fn page_read_returns_sixteen_bytes() {
    let page_data: Vec<u8> = (0u8..16).collect();
    let mut dev = fixtures::initialized_device(vec![
        test_support::type_a_ultralight_chunk(&UID),
        test_support::capability_chunk(0x12),
        test_support::thru_chunk(&page_data),
    ]);
    dev.poll_type_a().unwrap();

    let data = dev.read_ultralight_page(4).unwrap();
    assert_eq!(data, page_data);
}

#[test]
fn last_page_is_readable_one_past_is_not() {
    let page_data = [0u8; 16];
    let mut dev = fixtures::initialized_device(vec![
        test_support::type_a_ultralight_chunk(&UID),
        test_support::capability_chunk(0x12),
        test_support::thru_chunk(&page_data),
    ]);
    dev.poll_type_a().unwrap();

    // NTAG213: pages 0..=44
    assert!(dev.read_ultralight_page(44).is_ok());
    assert!(matches!(
        dev.read_ultralight_page(45),
        Err(Error::OutOfRange {
            page: 45,
            total: 45
        })
    ));
}

#[test]
fn page_read_without_poll_is_no_card() {
    let mut dev = fixtures::initialized_device(vec![]);
    assert!(matches!(
        dev.read_ultralight_page(0),
        Err(Error::NoCardSelected)
    ));
}
