//! Device handle, builder and per-device session state.

pub mod builder;
pub mod handle;
pub mod session;

pub use builder::DeviceBuilder;
pub use handle::{Initialized, Rcs620s, Uninitialized};
pub use session::Session;
