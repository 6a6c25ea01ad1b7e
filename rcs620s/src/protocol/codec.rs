//! Glue between typed commands/responses and the wire frame.

use crate::Result;

use super::commands::Command;
use super::responses::Response;
use super::Frame;

/// Encode a Command into a full wire frame (preamble/length/DCS).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(&cmd.encode())
}

/// Decode a full wire frame and validate the contained response against the
/// expected command code.
pub fn decode_response_frame(expected_cmd: u8, frame: &[u8]) -> Result<Response> {
    let payload = Frame::decode(frame)?;
    Response::decode(expected_cmd, &payload)
}
