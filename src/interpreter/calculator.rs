use std::io::BufRead;

use crate::interpreter::{
    parser::{core::ParseResult, statement::parse_statement},
    symbol_table::SymbolTable,
    token::Operator,
    token_stream::TokenStream,
};

/// What happened when the calculator was asked for the next statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A statement was evaluated to this value.
    Value(f64),
    /// The input asked to quit, or ran out.
    Quit,
}

/// One evaluation session.
///
/// Owns the token stream over the session's input and the symbol table the
/// statements read and extend. Drivers call
/// [`evaluate_next`](Self::evaluate_next) in a loop and
/// [`recover`](Self::recover) after every error.
pub struct Calculator<R> {
    tokens:  TokenStream<R>,
    symbols: SymbolTable,
}

impl<R: BufRead> Calculator<R> {
    /// Starts a session with `pi` and `e` declared.
    pub fn new(input: R) -> Self {
        Self::with_symbols(input, SymbolTable::with_constants())
    }

    /// Starts a session with a prepared symbol table.
    pub const fn with_symbols(input: R, symbols: SymbolTable) -> Self {
        Self { tokens: TokenStream::new(input),
               symbols }
    }

    /// Evaluates the next statement.
    ///
    /// Leading `=` tokens are skipped. `exit`, an undeclared `x` or the end of
    /// input yield [`Outcome::Quit`]; anything else is parsed as a statement.
    ///
    /// # Errors
    /// Any parse, runtime or I/O error. After a parse or runtime error the
    /// caller should invoke [`recover`](Self::recover) before continuing.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::calculator::{Calculator, Outcome};
    ///
    /// let mut calculator = Calculator::new("let r = 2 = r * r = x".as_bytes());
    ///
    /// assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(2.0));
    /// assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Value(4.0));
    /// assert_eq!(calculator.evaluate_next().unwrap(), Outcome::Quit);
    /// ```
    pub fn evaluate_next(&mut self) -> ParseResult<Outcome> {
        let mut token = self.tokens.get(&self.symbols)?;
        while token.is_operator(Operator::Print) {
            token = self.tokens.get(&self.symbols)?;
        }

        if token.is_quit() {
            tracing::debug!(line = self.tokens.line(), "quit requested");
            return Ok(Outcome::Quit);
        }

        self.tokens.putback(token)?;
        let value = parse_statement(&mut self.tokens, &mut self.symbols)?;
        Ok(Outcome::Value(value))
    }

    /// Discards the rest of a failed statement, up to and including the next
    /// `=`.
    ///
    /// # Errors
    /// Only I/O errors from the input source.
    pub fn recover(&mut self) -> ParseResult<()> {
        tracing::debug!(line = self.tokens.line(), "discarding input up to the next '='");
        self.tokens.ignore_until(Operator::Print)
    }

    /// The variables declared so far.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}
