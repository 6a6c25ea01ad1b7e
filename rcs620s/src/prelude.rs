//! Convenience re-exports for the common driver surface.

pub use crate::device::DeviceBuilder;
pub use crate::device::Rcs620s;
pub use crate::device::Session;
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, Frame, Response};
pub use crate::transport::{ByteChannel, Clock, MonotonicClock};
pub use crate::{
    BaudRate, Error, Idm, PiccType, Pmm, PollOutcome, Result, SystemCode, UltralightVariant,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_timeout, ms};
