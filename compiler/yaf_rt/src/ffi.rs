//! C ABI entry points for generated code.
//!
//! Generated code sees values as [`YafValue`]: a one-byte tag followed by a
//! payload union. Every entry point takes its arguments by value and returns
//! a new `YafValue`. Arguments are never consumed; a returned text payload is
//! owned by the caller and must be released with [`yaf_free_value`].
//!
//! # Text Across the Boundary
//!
//! Text travels as a NUL-terminated string allocated by this crate
//! (`CString::into_raw`). A null `string_val` is empty text. Text containing
//! a NUL byte is cut at that byte when handed to C.
//!
//! # Undefined Tags
//!
//! The Rust [`Value`] cannot hold an undefined or reserved tag, so a raw value
//! carrying one has no `Value` form ([`YafValue::to_value`] returns `None`).
//! Lenient entry points substitute their zero result (`unknown` when
//! rendering); type-checked entry points report a contract violation.
//!
//! # Safety
//!
//! Entry points that read text trust generated code to pass either null or a
//! valid NUL-terminated string, and to only free strings this runtime
//! allocated. They are not marked `unsafe` because they are `extern "C"` FFI
//! entry points, not Rust API functions.

#![allow(
    unsafe_code,
    reason = "C-ABI runtime functions read tagged unions and raw C strings"
)]
#![allow(
    clippy::not_unsafe_ptr_arg_deref,
    reason = "FFI entry points receive pointers from generated code which guarantees validity"
)]

use std::ffi::{c_char, c_int, c_void, CStr, CString};
use std::ptr;

use crate::builtins::{io, math, string, time};
use crate::check::{abort_on_violation, or_abort, ContractViolation, RtResult};
use crate::value::{print_rendering, Text, Value, ValueKind, UNKNOWN_RENDERING};
use crate::{coerce, gc};

pub const YAF_INT: u8 = ValueKind::Int.tag();
pub const YAF_FLOAT: u8 = ValueKind::Float.tag();
pub const YAF_STRING: u8 = ValueKind::Str.tag();
pub const YAF_BOOL: u8 = ValueKind::Bool.tag();
pub const YAF_ARRAY: u8 = ValueKind::Array.tag();

/// Payload of a [`YafValue`]; `tag` selects the live field.
#[repr(C)]
#[derive(Copy, Clone)]
pub union YafPayload {
    pub int_val: i64,
    pub float_val: f64,
    pub string_val: *mut c_char,
    pub bool_val: bool,
    /// Reserved with [`YAF_ARRAY`]; never written by this runtime.
    pub array_val: *mut c_void,
}

/// C representation of a runtime value: `{ u8 tag, union value }`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct YafValue {
    pub tag: u8,
    pub value: YafPayload,
}

/// Bytes of a C string; empty for null.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string that outlives
/// the returned slice.
unsafe fn c_bytes<'a>(ptr: *const c_char) -> &'a [u8] {
    if ptr.is_null() {
        &[]
    } else {
        CStr::from_ptr(ptr).to_bytes()
    }
}

/// Hand text to C as a freshly allocated C string.
///
/// Absent text becomes null; bytes from the first NUL on are dropped.
fn export_text(text: &Text) -> *mut c_char {
    if !text.has_storage() {
        return ptr::null_mut();
    }
    let bytes = text.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    CString::new(&bytes[..end]).unwrap_or_default().into_raw()
}

impl YafValue {
    /// Convert a runtime value, handing any text buffer to the caller.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Int(n) => YafValue {
                tag: YAF_INT,
                value: YafPayload { int_val: n },
            },
            Value::Float(f) => YafValue {
                tag: YAF_FLOAT,
                value: YafPayload { float_val: f },
            },
            Value::Str(text) => YafValue {
                tag: YAF_STRING,
                value: YafPayload {
                    string_val: export_text(&text),
                },
            },
            Value::Bool(b) => YafValue {
                tag: YAF_BOOL,
                value: YafPayload { bool_val: b },
            },
        }
    }

    /// Copy this raw value into a runtime value.
    ///
    /// Text is duplicated, so the raw value keeps its own buffer. Returns
    /// `None` for the reserved array tag and for undefined tags.
    pub fn to_value(&self) -> Option<Value> {
        // SAFETY: the tag selects the union field its producer wrote; string
        // payloads are null or valid C strings.
        unsafe {
            match self.tag {
                YAF_INT => Some(Value::Int(self.value.int_val)),
                YAF_FLOAT => Some(Value::Float(self.value.float_val)),
                YAF_STRING => {
                    let raw = self.value.string_val;
                    Some(Value::Str(if raw.is_null() {
                        Text::absent()
                    } else {
                        Text::new(c_bytes(raw))
                    }))
                }
                YAF_BOOL => Some(Value::Bool(self.value.bool_val)),
                _ => None,
            }
        }
    }
}

/// Convert for a type-checked entry point, aborting if the tag has no
/// `Value` form.
fn import_checked(raw: &YafValue, expected: ValueKind, operation: &'static str) -> Value {
    if let Some(value) = raw.to_value() {
        return value;
    }
    let violation = match ValueKind::from_tag(raw.tag) {
        Some(found) => ContractViolation::new(operation, expected, found),
        None => ContractViolation::undefined_tag(operation, expected, raw.tag),
    };
    abort_on_violation(&violation)
}

/// Run a single-argument type-checked builtin at the C boundary.
fn checked_unary(
    raw: &YafValue,
    expected: ValueKind,
    operation: &'static str,
    builtin: fn(&Value) -> RtResult<Value>,
) -> YafValue {
    let value = import_checked(raw, expected, operation);
    YafValue::from_value(or_abort(builtin(&value)))
}

/// Convert for a lenient entry point; undefined tags become `fallback`.
fn import_or(raw: &YafValue, fallback: Value) -> Value {
    raw.to_value().unwrap_or(fallback)
}

/// Rendering of a raw value; undefined tags render as `unknown`.
fn rendering(raw: &YafValue) -> Vec<u8> {
    match raw.to_value() {
        Some(value) => value.render().into_owned(),
        None => UNKNOWN_RENDERING.as_bytes().to_vec(),
    }
}

// ── Construction and release ────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_make_int(value: i64) -> YafValue {
    YafValue::from_value(Value::int(value))
}

#[no_mangle]
pub extern "C" fn yaf_make_float(value: f64) -> YafValue {
    YafValue::from_value(Value::float(value))
}

/// Copy a C string into a new text value. Null is empty text.
#[no_mangle]
pub extern "C" fn yaf_make_string(value: *const c_char) -> YafValue {
    // SAFETY: caller passes null or a valid C string
    let bytes = unsafe { c_bytes(value) };
    YafValue::from_value(Value::text(Some(bytes)))
}

/// Any non-zero input is `true`.
#[no_mangle]
pub extern "C" fn yaf_make_bool(value: c_int) -> YafValue {
    YafValue::from_value(Value::boolean(value != 0))
}

/// The unit result, `Int(0)`.
#[no_mangle]
pub extern "C" fn yaf_make_void() -> YafValue {
    YafValue::from_value(Value::void())
}

/// Free a value's text buffer and null the pointer.
///
/// No-op for null, for non-text values and for text already freed, so a
/// second call on the same value is harmless.
#[no_mangle]
pub extern "C" fn yaf_free_value(value: *mut YafValue) {
    // SAFETY: caller passes null or a valid, exclusively borrowed value
    let Some(value) = (unsafe { value.as_mut() }) else {
        return;
    };
    if value.tag != YAF_STRING {
        return;
    }
    // SAFETY: the string tag selects `string_val`
    let raw = unsafe { value.value.string_val };
    if raw.is_null() {
        return;
    }
    // SAFETY: non-null string payloads come from `CString::into_raw` in
    // `export_text` and have not been freed (freeing nulls the pointer).
    drop(unsafe { CString::from_raw(raw) });
    value.value.string_val = ptr::null_mut();
    tracing::trace!("released text storage");
}

// ── Coercions ───────────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_value_to_string(value: YafValue) -> YafValue {
    let converted = match value.to_value() {
        Some(v) => coerce::to_string(&v),
        None => Value::string(UNKNOWN_RENDERING),
    };
    YafValue::from_value(converted)
}

#[no_mangle]
pub extern "C" fn yaf_value_to_int(value: YafValue) -> YafValue {
    YafValue::from_value(coerce::to_int(&import_or(&value, Value::int(0))))
}

#[no_mangle]
pub extern "C" fn yaf_value_to_float(value: YafValue) -> YafValue {
    YafValue::from_value(coerce::to_float(&import_or(&value, Value::float(0.0))))
}

#[no_mangle]
pub extern "C" fn yaf_string_to_int(s: YafValue) -> YafValue {
    checked_unary(&s, ValueKind::Str, "string_to_int", coerce::string_to_int)
}

#[no_mangle]
pub extern "C" fn yaf_int_to_string(i: YafValue) -> YafValue {
    checked_unary(&i, ValueKind::Int, "int_to_string", coerce::int_to_string)
}

// ── Console output ──────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_print_value(value: YafValue) {
    print_rendering(&rendering(&value), true);
}

#[no_mangle]
pub extern "C" fn yaf_print_value_no_newline(value: YafValue) {
    print_rendering(&rendering(&value), false);
}

// ── Math ────────────────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_math_abs(value: YafValue) -> YafValue {
    let result = value
        .to_value()
        .map_or_else(Value::void, |v| math::abs(&v));
    YafValue::from_value(result)
}

#[no_mangle]
pub extern "C" fn yaf_math_max(a: YafValue, b: YafValue) -> YafValue {
    let result = match (a.to_value(), b.to_value()) {
        (Some(a), Some(b)) => math::max(&a, &b),
        _ => Value::void(),
    };
    YafValue::from_value(result)
}

#[no_mangle]
pub extern "C" fn yaf_math_min(a: YafValue, b: YafValue) -> YafValue {
    let result = match (a.to_value(), b.to_value()) {
        (Some(a), Some(b)) => math::min(&a, &b),
        _ => Value::void(),
    };
    YafValue::from_value(result)
}

#[no_mangle]
pub extern "C" fn yaf_math_pow(base: YafValue, exp: YafValue) -> YafValue {
    let base = import_or(&base, Value::float(0.0));
    let exp = import_or(&exp, Value::float(0.0));
    YafValue::from_value(math::pow(&base, &exp))
}

// ── Strings ─────────────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_string_length(s: YafValue) -> YafValue {
    checked_unary(&s, ValueKind::Str, "string_length", string::length)
}

#[no_mangle]
pub extern "C" fn yaf_string_upper(s: YafValue) -> YafValue {
    checked_unary(&s, ValueKind::Str, "string_upper", string::upper)
}

#[no_mangle]
pub extern "C" fn yaf_string_lower(s: YafValue) -> YafValue {
    checked_unary(&s, ValueKind::Str, "string_lower", string::lower)
}

/// Not type-checked: non-text operands count as empty text.
#[no_mangle]
pub extern "C" fn yaf_string_concat(a: YafValue, b: YafValue) -> YafValue {
    let a = import_or(&a, Value::void());
    let b = import_or(&b, Value::void());
    YafValue::from_value(string::concat(&a, &b))
}

#[no_mangle]
pub extern "C" fn yaf_string_substring(s: YafValue, start: YafValue, length: YafValue) -> YafValue {
    let s = import_checked(&s, ValueKind::Str, "string_substring");
    let start = import_or(&start, Value::void());
    let length = import_or(&length, Value::void());
    YafValue::from_value(or_abort(string::substring(&s, &start, &length)))
}

// ── I/O ─────────────────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_io_read_file(path: YafValue) -> YafValue {
    checked_unary(&path, ValueKind::Str, "read_file", io::read_file)
}

#[no_mangle]
pub extern "C" fn yaf_io_write_file(path: YafValue, content: YafValue) -> YafValue {
    let path = import_checked(&path, ValueKind::Str, "write_file");
    let content = import_checked(&content, ValueKind::Str, "write_file");
    YafValue::from_value(or_abort(io::write_file(&path, &content)))
}

#[no_mangle]
pub extern "C" fn yaf_io_file_exists(path: YafValue) -> YafValue {
    checked_unary(&path, ValueKind::Str, "file_exists", io::file_exists)
}

#[no_mangle]
pub extern "C" fn yaf_io_input() -> YafValue {
    YafValue::from_value(io::input())
}

#[no_mangle]
pub extern "C" fn yaf_io_input_prompt(prompt: YafValue) -> YafValue {
    checked_unary(&prompt, ValueKind::Str, "input_prompt", io::input_prompt)
}

// ── Time ────────────────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_time_now() -> YafValue {
    YafValue::from_value(time::now())
}

#[no_mangle]
pub extern "C" fn yaf_time_now_millis() -> YafValue {
    YafValue::from_value(time::now_millis())
}

#[no_mangle]
pub extern "C" fn yaf_time_sleep(seconds: YafValue) -> YafValue {
    YafValue::from_value(time::sleep(&import_or(&seconds, Value::void())))
}

// ── Runtime hooks ───────────────────────────────────────────────────────

#[no_mangle]
pub extern "C" fn yaf_gc_collect() {
    gc::collect();
}

#[no_mangle]
pub extern "C" fn yaf_gc_final_cleanup() {
    gc::final_cleanup();
}

/// Install the tracing subscriber if `RUST_LOG` is set. Idempotent.
#[no_mangle]
pub extern "C" fn yaf_runtime_init() {
    crate::init_tracing();
}
