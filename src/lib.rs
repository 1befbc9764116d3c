//! # reckon
//!
//! reckon is an interactive desk calculator written in Rust.
//! It reads statements terminated by `=`, evaluates them with a
//! recursive-descent grammar and prints one result per statement. Variables
//! can be declared with `let`, and `pow` and `sqrt` are built in.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    error::Error,
    interpreter::calculator::{Calculator, Outcome},
    util::num::{DEFAULT_PRECISION, format_general},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a statement, plus the I/O failures of the input and output
/// streams. Every parse and runtime error carries the input line it occurred
/// on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and readable messages.
/// - Converts between the error kinds so `?` works across phases.
pub mod error;
/// Orchestrates statement evaluation.
///
/// This module ties together the lexer, the token stream, the grammar, the
/// numeric primitives and the symbol table, and exposes the calculator
/// session used by drivers.
///
/// # Responsibilities
/// - Turns characters into classified tokens.
/// - Evaluates statements while parsing them.
/// - Owns the session's variables.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
///
/// This module provides checked narrowing from `f64` to integers and the
/// `%g`-style formatting used to print results.
pub mod util;

/// Settings for the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Significant digits used when printing results.
    pub precision: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

/// Runs a read-eval-print session until quit or end of input.
///
/// Every evaluated statement prints `=` followed by its value on `output`.
/// A statement that fails prints its error message on `diagnostics`; the rest
/// of it, up to the next `=`, is discarded and the session continues with the
/// following statement. `pi` and `e` are declared before the first statement.
///
/// # Errors
/// Returns an error only when reading `input` or writing either stream fails.
///
/// # Examples
/// ```
/// use reckon::{Options, run};
///
/// let mut output = Vec::new();
/// let mut diagnostics = Vec::new();
/// run("let r = 3 = 2 * r = 1 / 0 = r + 1 = x".as_bytes(),
///     &mut output,
///     &mut diagnostics,
///     Options::default()).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "=3\n=6\n=4\n");
/// assert_eq!(String::from_utf8(diagnostics).unwrap(),
///            "Error on line 1: Divide by zero.\n");
/// ```
pub fn run<R, W, D>(input: R,
                    output: &mut W,
                    diagnostics: &mut D,
                    options: Options)
                    -> Result<(), Error>
    where R: BufRead,
          W: Write,
          D: Write
{
    let mut calculator = Calculator::new(input);

    loop {
        match calculator.evaluate_next() {
            Ok(Outcome::Value(value)) => {
                tracing::debug!(value, "statement evaluated");
                writeln!(output, "={}", format_general(value, options.precision))?;
            },
            Ok(Outcome::Quit) => break,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "statement failed");
                writeln!(diagnostics, "{e}")?;
                calculator.recover()?;
            },
        }
    }

    output.flush()?;
    Ok(())
}
