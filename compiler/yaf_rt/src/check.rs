//! Contract checks for builtin arguments.
//!
//! A builtin that requires a particular kind calls one of the `require_*`
//! functions before touching its argument. A mismatch produces a
//! [`ContractViolation`] which travels back through `Result` to the outermost
//! call boundary; only [`abort_on_violation`] turns it into a diagnostic and
//! process termination.
//!
//! A violation reaching this layer means the code generator emitted a call
//! with the wrong argument kind. There is no recovery path.

use std::fmt;

use crate::value::{Text, Value, ValueKind};

/// Exit status used when a contract violation terminates the process.
pub const CONTRACT_VIOLATION_EXIT_CODE: i32 = 1;

/// What a contract check actually found.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Found {
    /// A defined kind other than the expected one.
    Kind(ValueKind),
    /// A raw tag outside the defined tag space (C ABI only).
    Undefined(u8),
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Kind(kind) => write!(f, "{kind}"),
            Found::Undefined(tag) => write!(f, "undefined tag {tag}"),
        }
    }
}

/// An argument of the wrong kind reached a type-checked builtin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Runtime error in {operation}: expected type {expected}, got {found}")]
pub struct ContractViolation {
    /// Builtin that performed the check (e.g. `string_upper`).
    pub operation: &'static str,
    pub expected: ValueKind,
    pub found: Found,
}

impl ContractViolation {
    pub fn new(operation: &'static str, expected: ValueKind, found: ValueKind) -> Self {
        ContractViolation {
            operation,
            expected,
            found: Found::Kind(found),
        }
    }

    /// Violation for a raw value whose tag is not a defined kind.
    pub fn undefined_tag(operation: &'static str, expected: ValueKind, tag: u8) -> Self {
        ContractViolation {
            operation,
            expected,
            found: Found::Undefined(tag),
        }
    }
}

/// Result of a type-checked builtin.
pub type RtResult<T> = Result<T, ContractViolation>;

/// Require `value` to be of kind `expected`.
pub fn require_kind(value: &Value, expected: ValueKind, operation: &'static str) -> RtResult<()> {
    let actual = value.kind();
    if actual == expected {
        Ok(())
    } else {
        Err(ContractViolation::new(operation, expected, actual))
    }
}

/// Require a text argument and borrow its payload.
pub fn require_text<'a>(value: &'a Value, operation: &'static str) -> RtResult<&'a Text> {
    match value {
        Value::Str(text) => Ok(text),
        other => Err(ContractViolation::new(operation, ValueKind::Str, other.kind())),
    }
}

/// Require an integer argument and return it.
pub fn require_int(value: &Value, operation: &'static str) -> RtResult<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(ContractViolation::new(operation, ValueKind::Int, other.kind())),
    }
}

/// Report `violation` on stderr and terminate the process.
///
/// This is the only place in the runtime that exits.
pub fn abort_on_violation(violation: &ContractViolation) -> ! {
    tracing::debug!(
        operation = violation.operation,
        expected = %violation.expected,
        found = %violation.found,
        "contract violation, terminating"
    );
    eprintln!("{violation}");
    std::process::exit(CONTRACT_VIOLATION_EXIT_CODE)
}

/// Unwrap a checked result, terminating the process on violation.
pub fn or_abort<T>(result: RtResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(violation) => abort_on_violation(&violation),
    }
}
