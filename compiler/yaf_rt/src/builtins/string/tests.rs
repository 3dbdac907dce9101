use pretty_assertions::assert_eq;

use super::*;
use crate::check::ContractViolation;
use crate::value::ValueKind;

#[test]
fn length_counts_bytes() {
    assert_eq!(length(&Value::string("hello")), Ok(Value::int(5)));
    assert_eq!(length(&Value::string("")), Ok(Value::int(0)));
    // "é" is two bytes in UTF-8
    assert_eq!(length(&Value::string("é")), Ok(Value::int(2)));
}

#[test]
fn length_of_released_text_is_zero() {
    let mut value = Value::string("abc");
    value.release();
    assert_eq!(length(&value), Ok(Value::int(0)));
}

#[test]
fn case_mapping_is_ascii_only() {
    assert_eq!(upper(&Value::string("MiXed 123")), Ok(Value::string("MIXED 123")));
    assert_eq!(lower(&Value::string("MiXed 123")), Ok(Value::string("mixed 123")));
    assert_eq!(upper(&Value::string("é")), Ok(Value::string("é")));
}

#[test]
fn case_mapping_keeps_non_utf8_bytes() {
    let input = Value::string(vec![0xff, b'a']);
    assert_eq!(upper(&input), Ok(Value::string(vec![0xff, b'A'])));
}

#[test]
fn checked_string_ops_reject_non_text() {
    assert_eq!(
        upper(&Value::int(1)),
        Err(ContractViolation::new("string_upper", ValueKind::Str, ValueKind::Int))
    );
    assert_eq!(
        lower(&Value::boolean(true)),
        Err(ContractViolation::new("string_lower", ValueKind::Str, ValueKind::Bool))
    );
    assert_eq!(
        length(&Value::float(1.0)),
        Err(ContractViolation::new("string_length", ValueKind::Str, ValueKind::Float))
    );
}

#[test]
fn concat_joins_text() {
    assert_eq!(
        concat(&Value::string("foo"), &Value::string("bar")),
        Value::string("foobar")
    );
}

#[test]
fn concat_treats_non_text_as_empty() {
    assert_eq!(
        concat(&Value::string("ab"), &Value::boolean(true)),
        Value::string("ab")
    );
    assert_eq!(concat(&Value::int(1), &Value::string("cd")), Value::string("cd"));
    assert_eq!(concat(&Value::int(1), &Value::float(2.0)), Value::string(""));
}

#[test]
fn concat_with_released_text() {
    let mut released = Value::string("gone");
    released.release();
    assert_eq!(concat(&released, &Value::string("x")), Value::string("x"));
}

#[test]
fn substring_selects_byte_range() {
    let s = Value::string("hello world");
    assert_eq!(
        substring(&s, &Value::int(6), &Value::int(5)),
        Ok(Value::string("world"))
    );
    assert_eq!(
        substring(&s, &Value::int(0), &Value::int(100)),
        Ok(Value::string("hello world"))
    );
    assert_eq!(
        substring(&s, &Value::int(11), &Value::int(3)),
        Ok(Value::string(""))
    );
}

#[test]
fn substring_out_of_range_is_empty() {
    let s = Value::string("abc");
    assert_eq!(substring(&s, &Value::int(4), &Value::int(1)), Ok(Value::string("")));
    assert_eq!(substring(&s, &Value::int(-1), &Value::int(2)), Ok(Value::string("")));
    assert_eq!(substring(&s, &Value::int(0), &Value::int(-2)), Ok(Value::string("")));
}

#[test]
fn substring_coerces_bounds() {
    let s = Value::string("abcdef");
    assert_eq!(
        substring(&s, &Value::float(1.9), &Value::string("2")),
        Ok(Value::string("bc"))
    );
}

#[test]
fn substring_requires_text() {
    assert_eq!(
        substring(&Value::int(5), &Value::int(0), &Value::int(1)),
        Err(ContractViolation::new(
            "string_substring",
            ValueKind::Str,
            ValueKind::Int
        ))
    );
}
