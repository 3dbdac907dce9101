//! Numeric builtins.
//!
//! None of these check their arguments. Non-numeric input yields `Int(0)`,
//! except for `pow`, which always returns a float.

#![allow(
    clippy::cast_precision_loss,
    reason = "mixed int/float operations promote the integer to f64"
)]

use crate::value::Value;

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Numeric operands of a binary operation after promotion.
enum Operands {
    Ints(i64, i64),
    Floats(f64, f64),
}

impl Operands {
    /// Both ints stay ints; any float promotes both; anything else is `None`.
    fn promote(a: &Value, b: &Value) -> Option<Self> {
        match (a, b) {
            (Value::Int(x), Value::Int(y)) => Some(Operands::Ints(*x, *y)),
            (Value::Float(x), Value::Float(y)) => Some(Operands::Floats(*x, *y)),
            (Value::Int(x), Value::Float(y)) => Some(Operands::Floats(*x as f64, *y)),
            (Value::Float(x), Value::Int(y)) => Some(Operands::Floats(*x, *y as f64)),
            _ => None,
        }
    }
}

/// Absolute value of an int or float.
///
/// `abs(i64::MIN)` saturates to `i64::MAX`.
pub fn abs(value: &Value) -> Value {
    match value {
        Value::Int(n) => Value::Int(n.saturating_abs()),
        Value::Float(f) => Value::Float(f.abs()),
        Value::Str(_) | Value::Bool(_) => Value::void(),
    }
}

/// Larger of two numbers.
///
/// Float comparison keeps `b` unless `a > b`, so a NaN operand on either
/// side is not filtered out.
pub fn max(a: &Value, b: &Value) -> Value {
    match Operands::promote(a, b) {
        Some(Operands::Ints(x, y)) => Value::Int(x.max(y)),
        Some(Operands::Floats(x, y)) => Value::Float(if x > y { x } else { y }),
        None => Value::void(),
    }
}

/// Smaller of two numbers. See [`max`] for NaN handling.
pub fn min(a: &Value, b: &Value) -> Value {
    match Operands::promote(a, b) {
        Some(Operands::Ints(x, y)) => Value::Int(x.min(y)),
        Some(Operands::Floats(x, y)) => Value::Float(if x < y { x } else { y }),
        None => Value::void(),
    }
}

/// Operand of `pow`: ints widen, non-numeric values count as zero.
fn pow_operand(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(f) => *f,
        Value::Str(_) | Value::Bool(_) => 0.0,
    }
}

/// `base ^ exponent`, always computed and returned as a float.
pub fn pow(base: &Value, exponent: &Value) -> Value {
    Value::Float(pow_operand(base).powf(pow_operand(exponent)))
}
