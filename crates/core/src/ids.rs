//! Millisecond-timestamp id generation.
//!
//! Record ids are the current UTC time in milliseconds, matching the format
//! the consuming front end already stores and sorts by. A process-wide
//! monotonic guard makes ids strictly increasing: two ids requested within
//! the same millisecond cannot collide.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Mint a unique numeric id derived from the current time in milliseconds.
pub fn next_id() -> i64 {
    loop {
        let last = LAST_ID.load(Ordering::SeqCst);
        let now = Utc::now().timestamp_millis();
        let candidate = if now > last { now } else { last + 1 };
        if LAST_ID
            .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return candidate;
        }
    }
}

/// Mint a unique id in its string form (used by string-keyed resources).
pub fn next_string_id() -> String {
    next_id().to_string()
}
