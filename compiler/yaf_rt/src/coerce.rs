//! Coercions between value kinds.
//!
//! `to_string`, `to_int` and `to_float` are total: every live kind maps to a
//! value of the target kind, text parsing falls back to zero, and nothing is
//! checked. `string_to_int` and `int_to_string` are the strict, contract-checked
//! helpers.
//!
//! | from \ to | string            | int               | float            |
//! |-----------|-------------------|-------------------|------------------|
//! | int       | base 10           | unchanged         | widened          |
//! | float     | general format    | truncated         | unchanged        |
//! | str       | copy              | lenient prefix    | lenient prefix   |
//! | bool      | `true` / `false`  | 1 / 0             | 1.0 / 0.0        |

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "float/int conversions are the coercion semantics: `as` truncates toward zero and saturates"
)]

use crate::check::{require_int, require_text, RtResult};
use crate::parse::{lenient_float, lenient_int, strict_int};
use crate::value::{Text, Value};

/// Convert any value to text. Text inputs are copied; absent text becomes
/// empty text with its own storage.
pub fn to_string(value: &Value) -> Value {
    match value {
        Value::Str(text) => Value::Str(Text::new(text.as_bytes())),
        other => Value::Str(Text::from_vec(other.render().into_owned())),
    }
}

/// Integer payload of [`to_int`].
///
/// Floats truncate toward zero (NaN becomes 0, out-of-range values
/// saturate); text is parsed leniently.
pub fn int_value(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        Value::Float(f) => *f as i64,
        Value::Str(text) => lenient_int(text.as_bytes()),
        Value::Bool(b) => i64::from(*b),
    }
}

/// Float payload of [`to_float`]. Text is parsed leniently.
pub fn float_value(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(f) => *f,
        Value::Str(text) => lenient_float(text.as_bytes()),
        Value::Bool(b) => f64::from(u8::from(*b)),
    }
}

/// Convert any value to an integer.
pub fn to_int(value: &Value) -> Value {
    Value::Int(int_value(value))
}

/// Convert any value to a float.
pub fn to_float(value: &Value) -> Value {
    Value::Float(float_value(value))
}

/// Strictly parse text as a whole base-10 integer.
///
/// Anything other than `-?[0-9]+` yields `Int(0)` instead of a partial parse.
/// The argument must be text.
pub fn string_to_int(value: &Value) -> RtResult<Value> {
    let text = require_text(value, "string_to_int")?;
    Ok(Value::Int(strict_int(text.as_bytes()).unwrap_or(0)))
}

/// Render an integer as base-10 text. The argument must be an integer.
pub fn int_to_string(value: &Value) -> RtResult<Value> {
    let n = require_int(value, "int_to_string")?;
    Ok(Value::string(n.to_string()))
}
