//! Clock and sleep builtins.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "sleep durations truncate to whole non-negative seconds"
)]

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::value::Value;

/// Time since the Unix epoch, or zero if the clock reads earlier than that.
fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
}

/// Current time in whole seconds since the Unix epoch.
pub fn now() -> Value {
    Value::Int(i64::try_from(since_epoch().as_secs()).unwrap_or(i64::MAX))
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> Value {
    Value::Int(i64::try_from(since_epoch().as_millis()).unwrap_or(i64::MAX))
}

/// Whole seconds requested by a `sleep` argument.
///
/// Floats truncate (`1.9` → 1, `0.5` → 0); negative durations and
/// non-numeric arguments request zero seconds.
pub fn sleep_seconds(value: &Value) -> u64 {
    match value {
        Value::Int(n) => u64::try_from(*n).unwrap_or(0),
        // `as` truncates toward zero and maps negatives and NaN to 0.
        Value::Float(f) => *f as u64,
        Value::Str(_) | Value::Bool(_) => 0,
    }
}

/// Block for the whole number of seconds in `seconds`. Returns `Bool(true)`.
pub fn sleep(seconds: &Value) -> Value {
    let secs = sleep_seconds(seconds);
    if secs > 0 {
        thread::sleep(Duration::from_secs(secs));
    }
    Value::boolean(true)
}

#[cfg(test)]
mod tests;
