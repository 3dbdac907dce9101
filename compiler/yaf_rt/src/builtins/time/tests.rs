use std::time::Instant;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn now_is_after_2020() {
    let Some(secs) = now().as_int() else {
        panic!("now() must return an int");
    };
    assert!(secs > 1_577_836_800, "{secs}");
}

#[test]
fn now_millis_agrees_with_now() {
    let secs = now().as_int().unwrap_or_default();
    let millis = now_millis().as_int().unwrap_or_default();
    assert!((millis / 1000 - secs).abs() <= 1, "{millis} vs {secs}");
}

#[test]
fn sleep_seconds_truncates_floats() {
    assert_eq!(sleep_seconds(&Value::float(1.9)), 1);
    assert_eq!(sleep_seconds(&Value::float(0.99)), 0);
    assert_eq!(sleep_seconds(&Value::float(2.0)), 2);
}

#[test]
fn sleep_seconds_clamps_negative_and_non_numeric() {
    assert_eq!(sleep_seconds(&Value::int(-3)), 0);
    assert_eq!(sleep_seconds(&Value::float(-1.5)), 0);
    assert_eq!(sleep_seconds(&Value::float(f64::NAN)), 0);
    assert_eq!(sleep_seconds(&Value::string("5")), 0);
    assert_eq!(sleep_seconds(&Value::boolean(true)), 0);
    assert_eq!(sleep_seconds(&Value::int(4)), 4);
}

#[test]
fn sleep_sub_second_returns_immediately() {
    let start = Instant::now();
    assert_eq!(sleep(&Value::float(0.9)), Value::boolean(true));
    assert!(start.elapsed().as_millis() < 500);
}

#[test]
fn sleep_fractional_blocks_whole_seconds_only() {
    let start = Instant::now();
    assert_eq!(sleep(&Value::float(1.9)), Value::boolean(true));
    let elapsed = start.elapsed();
    assert!(elapsed.as_millis() >= 1000, "{elapsed:?}");
    assert!(elapsed.as_millis() < 1900, "{elapsed:?}");
}
