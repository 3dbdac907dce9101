//! Float rendering.
//!
//! Floats render in positional notation with the shortest digit string that
//! parses back to the same value. There is no exponent form, so the lenient
//! integer scanner reads a rendered float as its truncated value (`1e17`
//! renders as `100000000000000000`). Integral values carry no fractional
//! part (`8`, not `8.0`).

/// Render a float in the runtime's general format.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_owned();
    }
    if f.is_infinite() {
        return if f.is_sign_positive() { "inf" } else { "-inf" }.to_owned();
    }
    format!("{f}")
}
