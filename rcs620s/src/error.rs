//! Error type shared across the crate.

use thiserror::Error;

/// Common error type for all driver operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No reader was found at the requested port, or none was configured.
    #[error("no reader found")]
    DeviceNotFound,

    /// The exchange's timeout budget ran out before a full response arrived.
    #[error("operation timed out")]
    Timeout,

    /// The byte stream does not form a valid frame (bad preamble, missing
    /// acknowledgement, implausible declared length).
    #[error("frame format error: {0}")]
    Frame(String),

    /// The frame checksum does not balance.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    Checksum {
        /// Checksum the length and payload bytes require.
        expected: u8,
        /// Checksum byte found on the wire.
        actual: u8,
    },

    /// Fewer bytes than the declared frame length are available yet.
    #[error("truncated frame: needed {needed} bytes, got {got}")]
    Truncated {
        /// Total bytes the declared length requires.
        needed: usize,
        /// Bytes received so far.
        got: usize,
    },

    /// The card answered a pass-through command with a non-zero status.
    #[error("card reported status {status:#04x}")]
    Card {
        /// Status byte reported by the chip.
        status: u8,
    },

    /// A caller-supplied parameter is out of the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Requested page lies beyond the detected tag's capacity.
    #[error("page {page} out of range: tag has {total} pages")]
    OutOfRange {
        /// Requested start page.
        page: u8,
        /// Total pages of the detected tag.
        total: u16,
    },

    /// The operation needs a selected card but no poll has succeeded.
    #[error("no card selected: poll for a card first")]
    NoCardSelected,

    /// A well-formed frame carried a response that does not match the
    /// command sent.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Byte the protocol requires at this position.
        expected: u8,
        /// Byte actually received.
        actual: u8,
    },

    /// A response body is shorter or longer than its fixed layout allows.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the layout requires.
        expected: usize,
        /// Length actually received.
        actual: usize,
    },

    /// Underlying I/O failure on the byte channel.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port error from the host OS.
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
