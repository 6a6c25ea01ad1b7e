//! CommunicateThruEX response decoder.

use crate::protocol::parser;
use crate::{Error, Result};

/// Decode a CommunicateThruEX body: `[status][n][card_response(n-1)]`.
///
/// A non-zero status is a card-side failure and surfaces as
/// [`Error::Card`] with the status byte.
pub fn decode_thru(body: &[u8]) -> Result<Vec<u8>> {
    let status = parser::byte_at(body, 0)?;
    if status != 0 {
        return Err(Error::Card { status });
    }
    let n = parser::byte_at(body, 1)? as usize;
    if n == 0 {
        return Err(Error::InvalidLength {
            expected: 1,
            actual: 0,
        });
    }
    // n counts its own length byte
    Ok(parser::slice_at(body, 2, n - 1)?.to_vec())
}
