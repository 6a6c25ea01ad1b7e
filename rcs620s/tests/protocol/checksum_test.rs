use rcs620s::protocol::dcs;

#[test]
fn dcs_balances_length_and_payload() {
    let payload = [0xD4, 0x32, 0x01, 0x00];
    let len = payload.len() as u16;
    let c = dcs(len, &payload);
    let sum = payload
        .iter()
        .fold((len as u8).wrapping_add(c), |acc, &b| acc.wrapping_add(b));
    assert_eq!(sum, 0);
}

#[test]
fn dcs_empty_zero_length() {
    assert_eq!(dcs(0, &[]), 0x00);
}
