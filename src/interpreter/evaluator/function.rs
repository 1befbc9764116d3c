use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_i32_truncated,
};

/// Raises `base` to an integral power.
///
/// The exponent is truncated toward zero before use, so `pow(2, 2.9)` is
/// `pow(2, 2)`. Negative exponents produce reciprocals.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent, narrowed to an `i32`.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `RuntimeError::ExponentOutOfRange` if the exponent is not finite or its
/// integral part does not fit an `i32`.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::pow;
///
/// assert_eq!(pow(2.0, 10.0, 1).unwrap(), 1024.0);
/// assert_eq!(pow(2.0, -1.0, 1).unwrap(), 0.5);
/// assert!(pow(2.0, f64::INFINITY, 1).is_err());
/// ```
pub fn pow(base: f64, exponent: f64, line: usize) -> EvalResult<f64> {
    let exponent = f64_to_i32_truncated(exponent, line)?;
    Ok(base.powi(exponent))
}

/// Computes the square root of a non-negative number.
///
/// # Errors
/// `RuntimeError::NegativeSqrt` if `value` is below zero. `-0.0` is accepted.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::function::sqrt;
///
/// assert_eq!(sqrt(4.0, 1).unwrap(), 2.0);
/// assert!(sqrt(-1.0, 1).is_err());
/// ```
pub fn sqrt(value: f64, line: usize) -> EvalResult<f64> {
    if value < 0.0 {
        return Err(RuntimeError::NegativeSqrt { value, line });
    }
    Ok(value.sqrt())
}
