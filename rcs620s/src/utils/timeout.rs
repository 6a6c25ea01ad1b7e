//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the commonly used default
//! timeout budget and provide a small conversion helper so tests and code
//! can express timeouts in milliseconds clearly.

use std::time::Duration;

/// Default timeout budget in milliseconds for one command exchange.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// How long a single bounded read waits before the transport loop re-checks
/// the overall budget.
pub const RECEIVE_SLICE_MS: u64 = 10;

/// Settle wait after writing the cancellation frame, before the input buffer
/// is discarded.
pub const CANCEL_SETTLE_MS: u64 = 10;

/// Wait after a completed Push sequence so the card can process the data.
pub const PUSH_SETTLE_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default timeout budget as Duration.
pub fn default_timeout() -> Duration {
    ms(DEFAULT_TIMEOUT_MS)
}
