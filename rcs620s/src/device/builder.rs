//! Helper to construct a device handle with optional configuration.

use crate::device::handle::{Rcs620s, Uninitialized};
use crate::transport::{ByteChannel, Clock};
use crate::utils;
use crate::{Error, Result};
use std::time::Duration;

/// Builder for [`Rcs620s`]: injected channel, optional clock and timeout.
pub struct DeviceBuilder {
    channel: Option<Box<dyn ByteChannel>>,
    clock: Option<Box<dyn Clock>>,
    timeout: Duration,
}

impl DeviceBuilder {
    /// Start an empty builder with the default timeout budget.
    pub fn new() -> Self {
        Self {
            channel: None,
            clock: None,
            timeout: utils::default_timeout(),
        }
    }

    /// Provide the byte channel (e.g. a `SerialChannel` or a `MockChannel`).
    pub fn with_channel(mut self, channel: Box<dyn ByteChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Override the wall clock, e.g. with a `VirtualClock` in tests.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Override the timeout budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Consume the builder and return an uninitialized device handle.
    /// A channel is required; otherwise returns `DeviceNotFound`.
    pub fn build_uninitialized(self) -> Result<Rcs620s<Uninitialized>> {
        let channel = self.channel.ok_or(Error::DeviceNotFound)?;
        let clock = self
            .clock
            .unwrap_or_else(|| Box::new(crate::transport::MonotonicClock::new()));
        Ok(Rcs620s::from_parts(channel, clock, self.timeout))
    }
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
