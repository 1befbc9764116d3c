use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Number of significant digits C++ streams print by default.
pub const DEFAULT_PRECISION: usize = 6;

/// Most significant digits ever printed. 17 digits identify any `f64`.
pub const MAX_PRECISION: usize = 17;

/// Truncates an `f64` toward zero and narrows it to an `i32`.
///
/// The fractional part is discarded. Values that are not finite, or whose
/// integral part lies outside the `i32` range, are rejected instead of being
/// saturated.
///
/// ## Errors
/// Returns `RuntimeError::ExponentOutOfRange` if the value cannot be
/// represented.
///
/// ## Parameters
/// - `value`: The floating-point value to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use reckon::{error::RuntimeError, util::num::f64_to_i32_truncated};
///
/// assert_eq!(f64_to_i32_truncated(10.0, 1).unwrap(), 10);
/// assert_eq!(f64_to_i32_truncated(-2.9, 1).unwrap(), -2);
///
/// let err = f64_to_i32_truncated(1e10, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::ExponentOutOfRange { line: 4, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i32_truncated(value: f64, line: usize) -> EvalResult<i32> {
    let truncated = value.trunc();
    if !truncated.is_finite()
       || truncated < f64::from(i32::MIN)
       || truncated > f64::from(i32::MAX)
    {
        return Err(RuntimeError::ExponentOutOfRange { value, line });
    }
    Ok(truncated as i32)
}

/// Formats a value with `precision` significant digits, the way C's `%g`
/// does.
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, precision)`, scientific notation otherwise. Trailing zeros of the
/// fraction are removed, along with a dangling decimal point. The precision is
/// clamped to `1..=MAX_PRECISION`.
///
/// ## Example
/// ```
/// use reckon::util::num::format_general;
///
/// assert_eq!(format_general(1024.0, 6), "1024");
/// assert_eq!(format_general(3.141_592_653_5, 6), "3.14159");
/// assert_eq!(format_general(0.5, 6), "0.5");
/// assert_eq!(format_general(1e6, 6), "1e+06");
/// assert_eq!(format_general(0.000_012_5, 6), "1.25e-05");
/// assert_eq!(format_general(1.5, 70_000), "1.5");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0" } else { "0" };
        return text.to_string();
    }

    let precision = precision.clamp(1, MAX_PRECISION);
    // Rounding to `precision` digits first decides the exponent, so 999999.5
    // becomes 1e+06 rather than 1000000.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e')
                                         .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let upper = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= upper {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(upper - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
