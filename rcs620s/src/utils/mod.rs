//! Small, reusable helpers used across the crate.
//!
//! Hex rendering for log lines and timeout conversions live here so the
//! protocol and device modules stay focused on wire semantics.

pub mod hex;
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers
// can use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
pub use timeout::*;
