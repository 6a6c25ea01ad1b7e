//! rcs620s
//!
//! Pure Rust driver for the Sony RC-S620/S contactless reader module.
//!
//! The RC-S620/S speaks a framed serial protocol: every command is wrapped in
//! a preamble/length/checksum frame, acknowledged with a fixed ACK pattern
//! and answered with a response frame. This crate implements the frame codec,
//! the timeout-bounded command transport and the typed reader operations
//! (card polling for FeliCa / ISO14443 Type A / Type B, FeliCa Push,
//! Ultralight-family page reads, RF-field shutdown) on top of an injected
//! byte channel so the whole driver is testable without hardware.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
