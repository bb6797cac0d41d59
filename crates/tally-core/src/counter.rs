//! Counter display rules and retry policy.
//!
//! The rendered count is the raw post-increment value times
//! `DISPLAY_MULTIPLIER`; the inflated figure is part of the service's
//! message contract.

use std::time::Duration;

/// Factor applied to the stored hit count before rendering.
pub const DISPLAY_MULTIPLIER: i64 = 10_000_000;

/// Default number of retries after a failed store call.
pub const DEFAULT_RETRIES: u32 = 5;

/// Default wait between store attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Render the greeting body for a post-increment hit count.
///
/// The body carries a trailing newline. Multiplication saturates rather
/// than wrapping.
pub fn greeting(hits: i64) -> String {
    format!(
        "Hello World! I have been seen {} times.\n",
        hits.saturating_mul(DISPLAY_MULTIPLIER)
    )
}

/// Retry budget for the counter increment operation.
///
/// A budget of `retries = N` allows up to `N + 1` store calls with `N`
/// fixed-length waits between them. No backoff, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries remaining after the first failed attempt.
    pub retries: u32,
    /// Wait between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}
