//! File and console I/O builtins.
//!
//! Path and content arguments are type-checked. Filesystem failures are not:
//! a file that cannot be read reads as empty text and a failed write returns
//! `false`. Failures are logged at debug level and otherwise invisible to
//! the program.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::check::{require_text, RtResult};
use crate::value::{print_rendering, Text, Value};

/// Interpret text bytes as a filesystem path.
#[cfg(unix)]
fn text_path(text: &Text) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(text.as_bytes()))
}

/// Interpret text bytes as a filesystem path.
#[cfg(not(unix))]
fn text_path(text: &Text) -> PathBuf {
    PathBuf::from(text.to_string_lossy().into_owned())
}

/// Read a whole file as text. Empty text if it cannot be opened or read.
pub fn read_file(path: &Value) -> RtResult<Value> {
    let path = text_path(require_text(path, "read_file")?);
    match fs::read(&path) {
        Ok(contents) => Ok(Value::string(contents)),
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "read_file failed");
            Ok(Value::string(""))
        }
    }
}

/// Write `content` to `path`, replacing any existing file.
///
/// Returns `Bool(true)` on success and `Bool(false)` if the file cannot be
/// created or written.
pub fn write_file(path: &Value, content: &Value) -> RtResult<Value> {
    let path = text_path(require_text(path, "write_file")?);
    let content = require_text(content, "write_file")?;
    match fs::write(&path, content.as_bytes()) {
        Ok(()) => Ok(Value::boolean(true)),
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "write_file failed");
            Ok(Value::boolean(false))
        }
    }
}

/// Whether anything exists at `path`.
pub fn file_exists(path: &Value) -> RtResult<Value> {
    let path = text_path(require_text(path, "file_exists")?);
    Ok(Value::boolean(path.exists()))
}

/// Read one line from `reader`.
///
/// The line may be of any length. One trailing `\n` is removed, then one
/// trailing `\r`. End of input and read errors both give empty text.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> Value {
    let mut line = Vec::new();
    if let Err(error) = reader.read_until(b'\n', &mut line) {
        tracing::debug!(%error, "line input failed");
        return Value::string("");
    }
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    Value::string(line)
}

/// Read one line from stdin. Blocks until a line or end of input arrives.
pub fn input() -> Value {
    read_line_from(&mut io::stdin().lock())
}

/// Print `prompt` (no newline, flushed), then read one line from stdin.
pub fn input_prompt(prompt: &Value) -> RtResult<Value> {
    let prompt = require_text(prompt, "input_prompt")?;
    print_rendering(prompt.as_bytes(), false);
    Ok(input())
}
