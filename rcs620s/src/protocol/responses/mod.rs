//! Response validation and per-family decoders. A frame payload is first
//! checked against the originating command here; the family-specific body
//! decoders live in `protocol::responses::<name>.rs`.

pub mod poll;
pub mod thru;

pub use poll::{decode_felica_target, decode_type_a_target, decode_type_b_target};
pub use poll::{FelicaTarget, TypeATarget, TypeBTarget};
pub use thru::decode_thru;

use crate::constants::DEVICE_PREFIX;
use crate::protocol::parser;
use crate::Result;

/// A validated chip response: the response code and the body following it.
#[derive(Debug, Clone)]
pub struct Response {
    /// Response code (originating command code + 1).
    pub code: u8,
    /// Body bytes after the prefix and code.
    pub body: Vec<u8>,
}

impl Response {
    /// Validate a frame payload against the command that produced it.
    ///
    /// The payload must start with the device prefix `0xD5` followed by
    /// `expected_cmd + 1`; anything else is an `UnexpectedResponse`.
    pub fn decode(expected_cmd: u8, payload: &[u8]) -> Result<Self> {
        parser::expect_byte(payload, 0, DEVICE_PREFIX)?;
        let code = expected_cmd.wrapping_add(1);
        parser::expect_byte(payload, 1, code)?;
        Ok(Self {
            code,
            body: payload[2..].to_vec(),
        })
    }
}
