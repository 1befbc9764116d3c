use std::io::BufRead;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        symbol_table::SymbolTable,
        token::{Operator, Token},
        token_stream::TokenStream,
    },
};

/// Consumes the next token, which must be the operator `expected`.
///
/// # Errors
/// `ParseError::ExpectedToken` naming the expected character.
pub(in crate::interpreter::parser) fn expect_operator<R>(tokens: &mut TokenStream<R>,
                                                         symbols: &SymbolTable,
                                                         expected: Operator)
                                                         -> ParseResult<()>
    where R: BufRead
{
    let token = tokens.get(symbols)?;
    if token.is_operator(expected) {
        return Ok(());
    }
    let line = tokens.line();
    keep_terminator(tokens, token)?;
    Err(ParseError::ExpectedToken { expected: expected.symbol(),
                                    line }.into())
}

/// Hands an offending `=` back to the stream before a statement is abandoned.
///
/// Recovery discards input up to the next `=`. When the token that broke the
/// statement is itself that `=`, it has to stay buffered, otherwise recovery
/// would skip the whole following statement. Other tokens are dropped.
pub(in crate::interpreter::parser) fn keep_terminator<R>(tokens: &mut TokenStream<R>,
                                                         token: Token)
                                                         -> ParseResult<()>
    where R: BufRead
{
    if token.is_operator(Operator::Print) {
        tokens.putback(token)?;
    }
    Ok(())
}
