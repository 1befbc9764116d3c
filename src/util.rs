/// Numeric conversion and formatting helpers.
///
/// This module narrows `f64` values to integers without silent saturation and
/// renders results with a fixed number of significant digits.
///
/// Conversions return a `Result`, which is `Ok` if the value fits and an error
/// otherwise.
pub mod num;
