use std::io::BufRead;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::function::{pow, sqrt},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_operator, keep_terminator},
        },
        symbol_table::SymbolTable,
        token::{Keyword, Operator, Token},
        token_stream::TokenStream,
    },
};

/// Parses and evaluates a primary expression.
///
/// Primaries form the base of the grammar and include:
/// - numbers, which covers declared variables already resolved by the
///   token stream
/// - parenthesized expressions
/// - prefix `-` and `+`, applied to another primary
/// - the calls `pow(base, exponent)` and `sqrt(x)`
///
/// Prefix signs are right-associative and bind tighter than any binary
/// operator, so `- -3` is `3` and `-2*3` is `(-2)*3`.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
///              | ("-" | "+") primary
///              | "pow" "(" expression "," expression ")"
///              | "sqrt" "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary.
/// - `symbols`: Variables visible to the expression.
///
/// # Returns
/// The value of the primary.
///
/// # Errors
/// - `ParseError::ExpectedToken` for a missing `(`, `,` or `)`.
/// - `RuntimeError::UndefinedVariable` for a name that was never declared.
/// - `ParseError::ExpectedPrimary` for any other token.
pub fn parse_primary<R>(tokens: &mut TokenStream<R>, symbols: &SymbolTable) -> ParseResult<f64>
    where R: BufRead
{
    match tokens.get(symbols)? {
        Token::Number(value) => Ok(value),
        Token::Operator(Operator::LParen) => {
            let value = parse_expression(tokens, symbols)?;
            expect_operator(tokens, symbols, Operator::RParen)?;
            Ok(value)
        },
        Token::Operator(Operator::Minus) => Ok(-parse_primary(tokens, symbols)?),
        Token::Operator(Operator::Plus) => parse_primary(tokens, symbols),
        Token::Keyword(Keyword::Pow) => parse_pow_call(tokens, symbols),
        Token::Keyword(Keyword::Sqrt) => parse_sqrt_call(tokens, symbols),
        Token::Identifier(name) => {
            Err(RuntimeError::UndefinedVariable { name,
                                                  line: tokens.line() }.into())
        },
        other => {
            let line = tokens.line();
            keep_terminator(tokens, other)?;
            Err(ParseError::ExpectedPrimary { line }.into())
        },
    }
}

/// Parses the argument list of `pow` and computes the power.
///
/// The exponent is truncated to an integer before use.
///
/// Grammar: `"(" expression "," expression ")"`, after the `pow` keyword.
fn parse_pow_call<R>(tokens: &mut TokenStream<R>, symbols: &SymbolTable) -> ParseResult<f64>
    where R: BufRead
{
    expect_operator(tokens, symbols, Operator::LParen)?;
    let base = parse_expression(tokens, symbols)?;
    expect_operator(tokens, symbols, Operator::Comma)?;
    let exponent = parse_expression(tokens, symbols)?;
    let line = tokens.line();
    let value = pow(base, exponent, line)?;
    expect_operator(tokens, symbols, Operator::RParen)?;
    Ok(value)
}

/// Parses the argument of `sqrt` and computes the square root.
///
/// The sign of the argument is checked before the closing parenthesis is
/// required, so `sqrt(-1` reports the negative operand first.
///
/// Grammar: `"(" expression ")"`, after the `sqrt` keyword.
fn parse_sqrt_call<R>(tokens: &mut TokenStream<R>, symbols: &SymbolTable) -> ParseResult<f64>
    where R: BufRead
{
    expect_operator(tokens, symbols, Operator::LParen)?;
    let argument = parse_expression(tokens, symbols)?;
    let value = sqrt(argument, tokens.line())?;
    expect_operator(tokens, symbols, Operator::RParen)?;
    Ok(value)
}
