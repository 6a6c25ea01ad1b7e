//! RFConfiguration encoder (command code 0x32).

use crate::constants::{CMD_RF_CONFIGURATION, HOST_PREFIX};

/// Encode an RFConfiguration payload: `D4 32 item data...`.
pub fn encode_rf_configuration(item: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + data.len());
    buf.push(HOST_PREFIX);
    buf.push(CMD_RF_CONFIGURATION);
    buf.push(item);
    buf.extend_from_slice(data);
    buf
}
