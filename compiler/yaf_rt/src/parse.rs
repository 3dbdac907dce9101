//! Numeric scanners for text coercion.
//!
//! Two policies exist side by side:
//!
//! - **Lenient** (`lenient_int`, `lenient_float`): skip leading whitespace,
//!   read the longest valid numeric prefix, ignore whatever follows and
//!   default to zero when no prefix exists. Integer overflow saturates.
//! - **Strict** (`strict_int`): the whole input must match `-?[0-9]+`.
//!
//! All scanning is byte-wise; no Unicode handling.

/// C `isspace` in the "C" locale.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

fn skip_space(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().take_while(|&&b| is_space(b)).count();
    &bytes[start..]
}

/// Split an optional leading `+`/`-`. Returns `(negative, rest)`.
fn split_sign(bytes: &[u8]) -> (bool, &[u8]) {
    match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, bytes),
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Accumulate ASCII digits into an `i64`, saturating at the range limits.
///
/// Negative values accumulate downward so `i64::MIN` is reachable.
fn accumulate(digits: &[u8], negative: bool) -> i64 {
    let mut acc: i64 = 0;
    for &d in digits {
        let d = i64::from(d - b'0');
        let next = acc.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(d)
            } else {
                v.checked_add(d)
            }
        });
        match next {
            Some(v) => acc = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    acc
}

/// Parse a base-10 integer prefix, `strtoll` style.
///
/// `"12abc"` → 12, `"  -7"` → -7, `"abc"` → 0, `""` → 0.
pub fn lenient_int(bytes: &[u8]) -> i64 {
    let (negative, rest) = split_sign(skip_space(bytes));
    let len = digit_run(rest);
    accumulate(&rest[..len], negative)
}

/// Parse the entire input as `-?[0-9]+`.
///
/// Returns `None` for any other shape: empty input, a lone sign, a leading
/// `+`, surrounding whitespace or trailing characters. Out-of-range values
/// saturate.
pub fn strict_int(bytes: &[u8]) -> Option<i64> {
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(accumulate(digits, negative))
}

/// Length of a case-insensitive ASCII keyword at the start of `bytes`.
fn keyword_len(bytes: &[u8], keyword: &[u8]) -> Option<usize> {
    let head = bytes.get(..keyword.len())?;
    head.eq_ignore_ascii_case(keyword).then_some(keyword.len())
}

/// Length of the longest floating literal at the start of `bytes` (sign
/// excluded): `digits[.digits][(e|E)[sign]digits]`, `inf`, `infinity` or
/// `nan`.
fn float_prefix_len(bytes: &[u8]) -> usize {
    if let Some(len) = keyword_len(bytes, b"infinity")
        .or_else(|| keyword_len(bytes, b"inf"))
        .or_else(|| keyword_len(bytes, b"nan"))
    {
        return len;
    }

    let int_digits = digit_run(bytes);
    let mut len = int_digits;
    let mut frac_digits = 0;
    if bytes.get(len) == Some(&b'.') {
        frac_digits = digit_run(&bytes[len + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // An exponent counts only when at least one digit follows it.
    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let (_, after_sign) = split_sign(&bytes[len + 1..]);
        let sign_len = bytes.len() - (len + 1) - after_sign.len();
        let exp_digits = digit_run(after_sign);
        if exp_digits > 0 {
            len += 1 + sign_len + exp_digits;
        }
    }
    len
}

/// Parse a floating literal prefix, `strtod` style.
///
/// `"3.5kg"` → 3.5, `"-1e3"` → -1000.0, `"INF"` → ∞, `"x"` → 0.0.
/// Hexadecimal float literals are not recognized.
pub fn lenient_float(bytes: &[u8]) -> f64 {
    let trimmed = skip_space(bytes);
    let (_, unsigned) = split_sign(trimmed);
    let sign_len = trimmed.len() - unsigned.len();
    let len = float_prefix_len(unsigned);
    if len == 0 {
        return 0.0;
    }
    std::str::from_utf8(&trimmed[..sign_len + len])
        .ok()
        .and_then(|literal| literal.parse::<f64>().ok())
        .unwrap_or(0.0)
}
