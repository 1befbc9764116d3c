use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Divides `left` by `right`.
///
/// Only an exact zero is rejected; tiny divisors are allowed to overflow to
/// infinity.
///
/// # Errors
/// `RuntimeError::DivideByZero` when `right` is zero.
///
/// # Example
/// ```
/// use reckon::{error::RuntimeError, interpreter::evaluator::binary::divide};
///
/// assert_eq!(divide(7.0, 2.0, 1).unwrap(), 3.5);
/// assert!(matches!(divide(7.0, 0.0, 3), Err(RuntimeError::DivideByZero { line: 3 })));
/// ```
pub fn divide(left: f64, right: f64, line: usize) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivideByZero { line });
    }
    Ok(left / right)
}

/// Computes the floating-point remainder of `left / right`.
///
/// This is C's `fmod`: the quotient is truncated toward zero, so the result
/// takes the sign of the dividend and fractional operands are allowed.
///
/// # Errors
/// `RuntimeError::ModuloByZero` when `right` is zero.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::binary::remainder;
///
/// assert_eq!(remainder(7.0, 3.0, 1).unwrap(), 1.0);
/// assert_eq!(remainder(-7.0, 3.0, 1).unwrap(), -1.0);
/// assert_eq!(remainder(5.5, 2.0, 1).unwrap(), 1.5);
/// ```
pub fn remainder(left: f64, right: f64, line: usize) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::ModuloByZero { line });
    }
    Ok(left % right)
}
