//! Wire frame encode/decode.
//!
//! Format: [Preamble(3)] [Len(2, little-endian)] [Payload(n)] [DCS(1)]
//! Preamble: 0x00 0x00 0xFF
//! The DCS balances length bytes + payload to zero mod 256.
//!
//! The reader also emits a fixed 6-byte ACK pattern (`00 00 FF 00 FF 00`)
//! before each response frame; [`Frame::is_ack`] recognizes it.

use crate::constants::{ACK_FRAME, FRAME_HEADER_LEN, FRAME_PREAMBLE, MAX_FRAME_PAYLOAD_LEN};
use crate::protocol::checksum::dcs;
use crate::{Error, Result};

/// Frame helper. Provides encode/decode of the wire frame.
pub struct Frame;

impl Frame {
    /// Encode a payload into a full wire frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_FRAME_PAYLOAD_LEN {
            return Err(Error::InvalidArgument(format!(
                "payload too large: {} bytes, max {}",
                payload.len(),
                MAX_FRAME_PAYLOAD_LEN
            )));
        }

        let len = payload.len() as u16;
        let mut out = Vec::with_capacity(FRAME_HEADER_LEN + payload.len() + 1);
        out.extend_from_slice(&FRAME_PREAMBLE);
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(payload);
        out.push(dcs(len, payload));
        Ok(out)
    }

    /// Decode a wire frame and return the payload.
    ///
    /// Returns [`Error::Truncated`] while fewer bytes than the declared
    /// length requires are available, which lets the transport's accumulate
    /// loop distinguish "keep reading" from a corrupt frame. Bytes past the
    /// declared frame end are ignored.
    pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
        if raw.len() < FRAME_HEADER_LEN + 1 {
            return Err(Error::Truncated {
                needed: FRAME_HEADER_LEN + 1,
                got: raw.len(),
            });
        }

        if raw[..3] != FRAME_PREAMBLE {
            return Err(Error::Frame("invalid preamble".into()));
        }

        let len = u16::from_le_bytes([raw[3], raw[4]]) as usize;
        if len > MAX_FRAME_PAYLOAD_LEN {
            return Err(Error::Frame(format!(
                "declared length {} exceeds maximum {}",
                len, MAX_FRAME_PAYLOAD_LEN
            )));
        }

        let needed = FRAME_HEADER_LEN + len + 1;
        if raw.len() < needed {
            return Err(Error::Truncated {
                needed,
                got: raw.len(),
            });
        }

        let payload = &raw[FRAME_HEADER_LEN..FRAME_HEADER_LEN + len];
        let expected = dcs(len as u16, payload);
        let actual = raw[FRAME_HEADER_LEN + len];
        if actual != expected {
            return Err(Error::Checksum { expected, actual });
        }

        Ok(payload.to_vec())
    }

    /// Total wire length of a frame carrying the given payload length.
    pub fn wire_len(payload_len: usize) -> usize {
        FRAME_HEADER_LEN + payload_len + 1
    }

    /// True when `raw` starts with the fixed acknowledgement pattern.
    pub fn is_ack(raw: &[u8]) -> bool {
        raw.len() >= ACK_FRAME.len() && raw[..ACK_FRAME.len()] == ACK_FRAME
    }
}
