use crate::error::RuntimeError;

/// Result type used by the evaluator.
///
/// Every numeric primitive and every symbol table operation returns either a
/// value of type `T` or a `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;
