/// Binary operator levels.
///
/// Addition and subtraction, then multiplication, division and remainder,
/// both left-associative.
pub mod binary;

/// Entry point for expressions and the shared result type.
pub mod core;

/// Statements and variable declarations.
///
/// Dispatches on `let` and binds declared names in the symbol table.
pub mod statement;

/// Primaries: numbers, parentheses, prefix signs and the `pow` and `sqrt`
/// calls.
pub mod unary;

mod utils;
