//! Wall-clock helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as unix seconds. Used for created/modified timestamps and
/// backup version stamps.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
