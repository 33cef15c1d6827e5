//! Cooldown gate for timed earning actions.
//!
//! Timestamps are epoch milliseconds, with `0` meaning the action was never taken.

use chrono::Duration;

/// Time left before an action stamped at `last_action_ms` may run again.
///
/// Returns `None` once `now_ms - last_action_ms >= window`, so the exact boundary
/// permits the action.
pub fn remaining(last_action_ms: i64, window: Duration, now_ms: i64) -> Option<Duration> {
    let elapsed = now_ms.saturating_sub(last_action_ms);
    let window_ms = window.num_milliseconds();

    if elapsed >= window_ms {
        None
    } else {
        Some(Duration::milliseconds(window_ms - elapsed))
    }
}
