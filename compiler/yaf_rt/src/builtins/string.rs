//! Text builtins. Byte semantics throughout; case mapping touches ASCII only.

use crate::check::{require_text, RtResult};
use crate::coerce::int_value;
use crate::value::Value;

/// Byte length of a text value.
pub fn length(value: &Value) -> RtResult<Value> {
    let text = require_text(value, "string_length")?;
    Ok(Value::Int(i64::try_from(text.len()).unwrap_or(i64::MAX)))
}

/// ASCII uppercase copy of a text value.
pub fn upper(value: &Value) -> RtResult<Value> {
    let text = require_text(value, "string_upper")?;
    Ok(Value::string(text.as_bytes().to_ascii_uppercase()))
}

/// ASCII lowercase copy of a text value.
pub fn lower(value: &Value) -> RtResult<Value> {
    let text = require_text(value, "string_lower")?;
    Ok(Value::string(text.as_bytes().to_ascii_lowercase()))
}

/// Bytes of a text operand; any other kind contributes nothing.
fn text_or_empty(value: &Value) -> &[u8] {
    value.as_bytes().unwrap_or_default()
}

/// Concatenate two values as text.
///
/// Not type-checked: a non-text operand is treated as empty text, so
/// `concat("ab", true)` is `"ab"`.
pub fn concat(a: &Value, b: &Value) -> Value {
    let a = text_or_empty(a);
    let b = text_or_empty(b);
    let mut joined = Vec::with_capacity(a.len() + b.len());
    joined.extend_from_slice(a);
    joined.extend_from_slice(b);
    Value::string(joined)
}

/// Byte range `[start, start + length)` of a text value.
///
/// `start` and `length` are coerced leniently to integers. A negative start or
/// length, or a start past the end, gives empty text; the end is clamped to
/// the text length.
pub fn substring(value: &Value, start: &Value, length: &Value) -> RtResult<Value> {
    let text = require_text(value, "string_substring")?;
    let bytes = text.as_bytes();

    let (Ok(start), Ok(length)) = (
        usize::try_from(int_value(start)),
        usize::try_from(int_value(length)),
    ) else {
        return Ok(Value::string(""));
    };
    if start > bytes.len() {
        return Ok(Value::string(""));
    }

    let end = start.saturating_add(length).min(bytes.len());
    Ok(Value::string(&bytes[start..end]))
}

#[cfg(test)]
mod tests;
