//! Contract violations terminate the process.
//!
//! Each test re-runs this test binary filtered to itself with
//! `YAF_RT_ABORT_CHILD` set. The child performs the offending call; the
//! parent checks the exit status and the diagnostic on stderr.

use std::env;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use yaf_rt::builtins::{io, string};
use yaf_rt::check::{or_abort, CONTRACT_VIOLATION_EXIT_CODE};
use yaf_rt::ffi::{self, YafPayload, YafValue};
use yaf_rt::Value;

const CHILD_ENV: &str = "YAF_RT_ABORT_CHILD";

/// Run `child` in a subprocess when invoked as the parent, or run it and exit
/// cleanly when invoked as the child.
fn run_isolated(test_name: &str, child: fn()) -> Output {
    if env::var_os(CHILD_ENV).is_some() {
        child();
        // Reaching here means no violation fired.
        std::process::exit(0);
    }
    let exe = env::current_exe().unwrap_or_else(|e| panic!("current_exe: {e}"));
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("spawn child: {e}"))
}

fn assert_violation(output: &Output, diagnostic: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        output.status.code(),
        Some(CONTRACT_VIOLATION_EXIT_CODE),
        "stderr: {stderr}"
    );
    assert!(stderr.contains(diagnostic), "stderr: {stderr}");
}

#[test]
fn ffi_upper_on_int_aborts() {
    let output = run_isolated("ffi_upper_on_int_aborts", || {
        ffi::yaf_string_upper(ffi::yaf_make_int(5));
    });
    assert_violation(
        &output,
        "Runtime error in string_upper: expected type str, got int",
    );
}

#[test]
fn ffi_length_on_bool_aborts() {
    let output = run_isolated("ffi_length_on_bool_aborts", || {
        ffi::yaf_string_length(ffi::yaf_make_bool(1));
    });
    assert_violation(
        &output,
        "Runtime error in string_length: expected type str, got bool",
    );
}

#[test]
fn ffi_int_to_string_on_float_aborts() {
    let output = run_isolated("ffi_int_to_string_on_float_aborts", || {
        ffi::yaf_int_to_string(ffi::yaf_make_float(1.5));
    });
    assert_violation(
        &output,
        "Runtime error in int_to_string: expected type int, got float",
    );
}

#[test]
fn ffi_write_file_checks_content() {
    let output = run_isolated("ffi_write_file_checks_content", || {
        let path = ffi::yaf_make_string(c"/nonexistent/never-written".as_ptr());
        ffi::yaf_io_write_file(path, ffi::yaf_make_int(1));
    });
    assert_violation(
        &output,
        "Runtime error in write_file: expected type str, got int",
    );
}

#[test]
fn ffi_undefined_tag_aborts_checked_op() {
    let output = run_isolated("ffi_undefined_tag_aborts_checked_op", || {
        let raw = YafValue {
            tag: 99,
            value: YafPayload { int_val: 0 },
        };
        ffi::yaf_io_file_exists(raw);
    });
    assert_violation(
        &output,
        "Runtime error in file_exists: expected type str, got undefined tag 99",
    );
}

#[test]
fn ffi_reserved_array_tag_aborts_checked_op() {
    let output = run_isolated("ffi_reserved_array_tag_aborts_checked_op", || {
        let raw = YafValue {
            tag: ffi::YAF_ARRAY,
            value: YafPayload { int_val: 0 },
        };
        ffi::yaf_string_lower(raw);
    });
    assert_violation(
        &output,
        "Runtime error in string_lower: expected type str, got array",
    );
}

#[test]
fn rust_api_or_abort_terminates() {
    let output = run_isolated("rust_api_or_abort_terminates", || {
        or_abort(io::input_prompt(&Value::float(2.0)));
    });
    assert_violation(
        &output,
        "Runtime error in input_prompt: expected type str, got float",
    );
}

#[test]
fn well_typed_call_exits_cleanly() {
    let output = run_isolated("well_typed_call_exits_cleanly", || {
        or_abort(string::upper(&Value::string("ok")));
    });
    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Runtime error"));
}
