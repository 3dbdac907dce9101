//! YAF Runtime Library (`libyaf_rt`)
//!
//! The runtime value layer for compiled YAF programs: the tagged [`Value`]
//! type, the coercions between its kinds, and the builtin operations that
//! generated code calls at execution time.
//!
//! # Build Modes
//!
//! - **rlib**: For Rust consumers and tests
//! - **staticlib**: For linking into generated executables (`libyaf_rt.a`)
//!
//! # Layers
//!
//! - **Values**: [`Value`], [`ValueKind`], [`Text`]
//! - **Coercions**: [`coerce`] (`to_string`, `to_int`, `to_float`, strict helpers)
//! - **Builtins**: [`builtins::math`], [`builtins::string`], [`builtins::io`],
//!   [`builtins::time`]
//! - **Contract checks**: [`check`]
//! - **C ABI**: [`ffi`] (`yaf_*` entry points on `#[repr(C)]` values)
//! - **Collector hooks**: [`gc`]
//!
//! # Failure Policies
//!
//! Type-checked builtins return [`RtResult`]; a wrong argument kind is a
//! [`ContractViolation`]. The C ABI layer turns a violation into a diagnostic
//! on stderr and exit status 1 via [`check::abort_on_violation`]. Everything
//! else degrades to a zero, `false` or empty result.
//!
//! # Debugging
//!
//! - `RUST_LOG=yaf_rt=debug`: Log degraded I/O and contract violations.
//! - `RUST_LOG=yaf_rt=trace`: Also log text releases and collector hooks.
//!
//! Logging is only active after [`init_tracing`] (C: `yaf_runtime_init`).

#![warn(clippy::allow_attributes_without_reason)]

pub mod builtins;
pub mod check;
pub mod coerce;
pub mod ffi;
pub mod format;
pub mod gc;
pub mod parse;
pub mod value;

use std::sync::Once;

pub use check::{ContractViolation, RtResult};
pub use value::{print_value, print_value_no_newline, Text, Value, ValueKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, and logs go to stderr so program output is unaffected.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
            // A host program may already own the global subscriber.
            if installed.is_err() {
                tracing::debug!("global tracing subscriber already set");
            }
        }
    });
}
