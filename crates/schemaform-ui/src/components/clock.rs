//! Millisecond wall clock for debounce deadlines.

use js_sys::Date;

/// Milliseconds since the epoch, clamped to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn now_ms() -> u64 {
    Date::now().max(0.0) as u64
}
