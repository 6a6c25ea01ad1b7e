//! Traits abstracting I/O and time away from protocol/device logic.

use crate::Result;
use std::time::Duration;

/// A duplex byte stream to the reader module. Injected into the device and
/// exclusively owned by it; the driver assumes in-order delivery but
/// tolerates partial reads.
pub trait ByteChannel {
    /// Write all bytes to the channel.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `max_len` bytes, waiting at most `wait`. Returns an empty
    /// vector when nothing arrived before the deadline; that is not an
    /// error.
    fn read_with_deadline(&mut self, max_len: usize, wait: Duration) -> Result<Vec<u8>>;

    /// Drop any bytes buffered on the input side.
    fn discard_input(&mut self) -> Result<()>;
}

/// Time capability for the transport loop. Injected so timeout behavior is
/// testable with virtual time and no real serial hardware.
pub trait Clock {
    /// Monotonic elapsed time since an arbitrary fixed epoch.
    fn now(&self) -> Duration;

    /// Block for the given duration.
    fn sleep(&mut self, duration: Duration);
}
