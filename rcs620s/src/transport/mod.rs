//! Byte channel and clock abstractions the driver runs on.

pub mod clock;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use clock::MonotonicClock;
pub use mock::{MockChannel, VirtualClock};
#[cfg(feature = "serial")]
pub use serial::SerialChannel;
pub use traits::{ByteChannel, Clock};
