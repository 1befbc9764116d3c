/// Shared result type for evaluation.
pub mod core;

/// Checked binary arithmetic.
///
/// Implements the multiplicative operators that can fail: division and the
/// floating-point remainder, both of which reject a zero divisor.
pub mod binary;

/// Built-in function implementations.
///
/// The two functions the grammar knows by name, `pow` and `sqrt`, with their
/// argument checks.
pub mod function;
