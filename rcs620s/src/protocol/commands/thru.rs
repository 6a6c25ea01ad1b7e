//! CommunicateThruEX encoder (command code 0xA0).

use crate::constants::{CMD_COMMUNICATE_THRU_EX, HOST_PREFIX};

/// Encode a CommunicateThruEX payload:
/// `D4 A0 deadline_lo deadline_hi (len+1) data...`.
///
/// The deadline is the chip-side wait in 0.5 ms units; the length byte
/// counts itself, hence the +1. Callers must have checked `data.len()`
/// against [`crate::constants::MAX_CARD_COMMAND_LEN`].
pub fn encode_communicate_thru_ex(deadline: u16, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5 + data.len());
    buf.push(HOST_PREFIX);
    buf.push(CMD_COMMUNICATE_THRU_EX);
    buf.extend_from_slice(&deadline.to_le_bytes());
    buf.push((data.len() + 1) as u8);
    buf.extend_from_slice(data);
    buf
}
