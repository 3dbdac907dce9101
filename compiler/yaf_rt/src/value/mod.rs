//! Runtime values for compiled YAF programs.
//!
//! `Value` is a closed sum over the four live kinds. The reserved array kind
//! exists only as a tag in [`ValueKind`] (and in the C tag space, see
//! [`crate::ffi`]); no `Value` of that kind can be constructed.
//!
//! # Ownership
//!
//! Only text owns heap storage. A `Value` has exactly one owner; cloning a
//! text value duplicates its bytes. Storage is freed either explicitly with
//! [`Value::release`] or when the value is dropped, never both.
//!
//! # Void
//!
//! There is no void kind. The unit result is `Int(0)`, built by
//! [`Value::void`].

mod text;

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

pub use text::Text;

use crate::format::format_float;

/// Rendering used for a tag this runtime does not define.
pub const UNKNOWN_RENDERING: &str = "unknown";

/// Discriminant of a value.
///
/// The numeric tags are part of the C ABI and must not change.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int = 0,
    Float = 1,
    Str = 2,
    Bool = 3,
    /// Reserved for a future collection kind. Never constructed.
    Array = 4,
}

impl ValueKind {
    /// Numeric tag of this kind.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Kind for a numeric tag, or `None` for an undefined tag.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(ValueKind::Int),
            1 => Some(ValueKind::Float),
            2 => Some(ValueKind::Str),
            3 => Some(ValueKind::Bool),
            4 => Some(ValueKind::Array),
            _ => None,
        }
    }

    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::Bool => "bool",
            ValueKind::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64-bit signed integer. Also the unit ("void") result when zero.
    Int(i64),
    /// IEEE double.
    Float(f64),
    /// Owned byte text.
    Str(Text),
    /// Boolean flag.
    Bool(bool),
}

// Constructors

impl Value {
    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub const fn boolean(b: bool) -> Self {
        Value::Bool(b)
    }

    /// The unit result: `Int(0)`.
    #[inline]
    pub const fn void() -> Self {
        Value::Int(0)
    }

    /// Create a text value, taking ownership of the buffer.
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("n = {n}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<Text>) -> Self {
        Value::Str(s.into())
    }

    /// Create a text value by copying `bytes`; `None` becomes empty text.
    pub fn text(bytes: Option<&[u8]>) -> Self {
        Value::Str(Text::new(bytes.unwrap_or_default()))
    }
}

// Inspection

impl Value {
    /// Active kind.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::Str(t) => Some(t),
            _ => None,
        }
    }

    /// Text bytes, or `None` for non-text values.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.as_text().map(Text::as_bytes)
    }
}

// Release

impl Value {
    /// Free any heap storage owned by this value.
    ///
    /// Text values become absent (empty) text; other kinds are untouched.
    /// Returns `true` only when storage was actually freed, so releasing the
    /// same value twice frees once.
    pub fn release(&mut self) -> bool {
        match self {
            Value::Str(text) => text.release(),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => false,
        }
    }
}

// Rendering

impl Value {
    /// Textual form of this value as raw bytes.
    ///
    /// Integers in base 10, floats via [`format_float`], text verbatim,
    /// booleans as `true`/`false`.
    pub fn render(&self) -> Cow<'_, [u8]> {
        match self {
            Value::Int(n) => Cow::Owned(n.to_string().into_bytes()),
            Value::Float(f) => Cow::Owned(format_float(*f).into_bytes()),
            Value::Str(text) => Cow::Borrowed(text.as_bytes()),
            Value::Bool(b) => Cow::Borrowed(bool_literal(*b).as_bytes()),
        }
    }

    /// Write the rendering to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.render())
    }
}

/// Literal word for a boolean.
pub(crate) const fn bool_literal(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.render()))
    }
}

/// Write `rendering` to stdout, optionally followed by a newline.
///
/// Console write failures are not reported to the program.
pub(crate) fn print_rendering(rendering: &[u8], newline: bool) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = out.write_all(rendering).and_then(|()| {
        if newline {
            out.write_all(b"\n")
        } else {
            Ok(())
        }
    });
    if let Err(error) = result.and_then(|()| out.flush()) {
        tracing::debug!(%error, "stdout write failed");
    }
}

/// Print a value followed by a newline.
pub fn print_value(value: &Value) {
    print_rendering(&value.render(), true);
}

/// Print a value without a trailing newline.
pub fn print_value_no_newline(value: &Value) {
    print_rendering(&value.render(), false);
}
