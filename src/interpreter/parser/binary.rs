use std::io::BufRead;

use crate::interpreter::{
    evaluator::binary::{divide, remainder},
    parser::{core::ParseResult, unary::parse_primary},
    symbol_table::SymbolTable,
    token::{Operator, Token},
    token_stream::TokenStream,
};

/// Parses addition and subtraction.
///
/// Handles left-associative binary operators: `+` and `-`. The first token
/// that is neither is pushed back for the caller.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `symbols`: Variables visible to the expression.
///
/// # Returns
/// The accumulated value.
pub fn parse_additive<R>(tokens: &mut TokenStream<R>, symbols: &SymbolTable) -> ParseResult<f64>
    where R: BufRead
{
    let mut left = parse_multiplicative(tokens, symbols)?;
    loop {
        match tokens.get(symbols)? {
            Token::Operator(Operator::Plus) => left += parse_multiplicative(tokens, symbols)?,
            Token::Operator(Operator::Minus) => left -= parse_multiplicative(tokens, symbols)?,
            other => {
                tokens.putback(other)?;
                return Ok(left);
            },
        }
    }
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`. Division and
/// remainder reject a zero right operand; `%` is the floating-point
/// remainder, so `7.5 % 2` is `1.5`.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "%") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `symbols`: Variables visible to the expression.
///
/// # Returns
/// The accumulated value.
///
/// # Errors
/// - `RuntimeError::DivideByZero` / `RuntimeError::ModuloByZero`.
/// - Any error raised while parsing an operand.
pub fn parse_multiplicative<R>(tokens: &mut TokenStream<R>,
                               symbols: &SymbolTable)
                               -> ParseResult<f64>
    where R: BufRead
{
    let mut left = parse_primary(tokens, symbols)?;
    loop {
        let token = tokens.get(symbols)?;
        let line = tokens.line();
        match token {
            Token::Operator(Operator::Star) => left *= parse_primary(tokens, symbols)?,
            Token::Operator(Operator::Slash) => {
                left = divide(left, parse_primary(tokens, symbols)?, line)?;
            },
            Token::Operator(Operator::Percent) => {
                left = remainder(left, parse_primary(tokens, symbols)?, line)?;
            },
            other => {
                tokens.putback(other)?;
                return Ok(left);
            },
        }
    }
}
