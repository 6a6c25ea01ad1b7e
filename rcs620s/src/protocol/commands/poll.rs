//! InListPassiveTarget encoder (command code 0x4A).

use crate::constants::{CMD_IN_LIST_PASSIVE_TARGET, HOST_PREFIX};
use crate::types::BaudRate;

/// Encode an InListPassiveTarget payload:
/// `D4 4A max_targets baud initiator...`.
pub fn encode_in_list_passive_target(max_targets: u8, baud: BaudRate, initiator: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + initiator.len());
    buf.push(HOST_PREFIX);
    buf.push(CMD_IN_LIST_PASSIVE_TARGET);
    buf.push(max_targets);
    buf.push(baud as u8);
    buf.extend_from_slice(initiator);
    buf
}
