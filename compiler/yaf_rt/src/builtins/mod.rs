//! Builtin function library.
//!
//! Every builtin borrows its arguments and returns a freshly constructed
//! [`Value`](crate::Value). Two failure policies apply, per operation:
//!
//! - **Type-checked** operations (string length/case, file paths and
//!   contents, input prompt) return [`RtResult`](crate::check::RtResult) and
//!   report a wrong argument kind as a
//!   [`ContractViolation`](crate::check::ContractViolation).
//! - **Lenient** operations (math, concatenation, sleep) return a plain
//!   `Value` and degrade to a zero/false/empty result on a kind mismatch.
//!
//! File open failures are lenient in both cases: they produce an empty or
//! `false` result, not an error.

pub mod io;
pub mod math;
pub mod string;
pub mod time;
