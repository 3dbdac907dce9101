//! Exclusively owned byte text.
//!
//! `Text` is the only heap-backed payload a `Value` can carry. Each instance
//! owns its own buffer: `Clone` duplicates the bytes and there is no way to
//! share a buffer between two values.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Owned byte sequence with byte/ASCII semantics.
///
/// Backing storage may be absent (after [`Text::release`], or when built from
/// an absent C string). Absent storage reads as the empty sequence everywhere.
#[derive(Clone, Default)]
pub struct Text {
    bytes: Option<Box<[u8]>>,
}

impl Text {
    /// Copy `bytes` into a newly allocated buffer.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Text {
            bytes: Some(bytes.as_ref().into()),
        }
    }

    /// Text with no backing storage.
    pub const fn absent() -> Self {
        Text { bytes: None }
    }

    /// Take ownership of an existing buffer without copying.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Text {
            bytes: Some(bytes.into_boxed_slice()),
        }
    }

    /// The bytes of this text; empty when storage is absent.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_deref().unwrap_or(&[])
    }

    /// Byte length.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Whether this text still owns a buffer.
    #[inline]
    pub fn has_storage(&self) -> bool {
        self.bytes.is_some()
    }

    /// Free the backing buffer, leaving the text absent.
    ///
    /// Returns `true` if a buffer was freed. Calling this again is a no-op
    /// that returns `false`.
    pub fn release(&mut self) -> bool {
        let released = self.bytes.take().is_some();
        if released {
            tracing::trace!("released text storage");
        }
        released
    }

    /// Lossy UTF-8 view for display purposes.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_storage() {
            write!(f, "{:?}", self.to_string_lossy())
        } else {
            f.write_str("<absent>")
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::from_vec(s.into_bytes())
    }
}

impl From<&[u8]> for Text {
    fn from(bytes: &[u8]) -> Self {
        Text::new(bytes)
    }
}

impl From<Vec<u8>> for Text {
    fn from(bytes: Vec<u8>) -> Self {
        Text::from_vec(bytes)
    }
}
