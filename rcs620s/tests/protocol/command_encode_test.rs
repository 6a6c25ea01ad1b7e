use rcs620s::protocol::{codec, Command, Frame};
use rcs620s::SystemCode;

#[test]
fn poll_felica_wire_frame() {
    let cmd = Command::poll_felica(SystemCode::ANY);
    let frame = codec::encode_command_frame(&cmd).unwrap();
    // preamble + little-endian length of the 9-byte payload
    assert_eq!(&frame[..5], &[0x00, 0x00, 0xFF, 0x09, 0x00]);
    assert_eq!(
        Frame::decode(&frame).unwrap(),
        vec![0xD4, 0x4A, 0x01, 0x01, 0x00, 0xFF, 0xFF, 0x00, 0x00]
    );
}

#[test]
fn rf_off_wire_frame() {
    let frame = codec::encode_command_frame(&Command::rf_off()).unwrap();
    assert_eq!(Frame::decode(&frame).unwrap(), vec![0xD4, 0x32, 0x01, 0x00]);
}

#[test]
fn communicate_thru_carries_length_plus_one() {
    let cmd = Command::CommunicateThruEx {
        deadline: 2000,
        data: vec![0x30, 0x04],
    };
    let payload = cmd.encode();
    assert_eq!(payload[4], 0x03); // len byte counts itself
    assert_eq!(&payload[5..], &[0x30, 0x04]);
}
