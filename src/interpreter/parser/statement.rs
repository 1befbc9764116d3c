use std::io::BufRead;

use crate::{
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::keep_terminator,
        },
        symbol_table::SymbolTable,
        token::{Keyword, Operator, Token},
        token_stream::TokenStream,
    },
};

/// Parses and evaluates a single statement.
///
/// A statement is either a declaration, introduced by `let`, or an
/// expression. The token that ends the statement, normally the `=` print
/// operator, is left pushed back.
///
/// Grammar: `statement := declaration | expression`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the statement.
/// - `symbols`: The session's variables; declarations add to them.
///
/// # Returns
/// The value of the expression, or the value bound by the declaration.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     parser::statement::parse_statement,
///     symbol_table::SymbolTable,
///     token_stream::TokenStream,
/// };
///
/// let mut symbols = SymbolTable::new();
/// let mut tokens = TokenStream::new("let r = 2 * 3 =".as_bytes());
///
/// assert_eq!(parse_statement(&mut tokens, &mut symbols).unwrap(), 6.0);
/// assert_eq!(symbols.lookup("r", 1).unwrap(), 6.0);
/// ```
pub fn parse_statement<R>(tokens: &mut TokenStream<R>,
                          symbols: &mut SymbolTable)
                          -> ParseResult<f64>
    where R: BufRead
{
    match tokens.get(symbols)? {
        Token::Keyword(Keyword::Let) => parse_declaration(tokens, symbols),
        other => {
            tokens.putback(other)?;
            parse_expression(tokens, symbols)
        },
    }
}

/// Parses a variable declaration and binds the new name.
///
/// Syntax, after the `let` keyword:
/// ```text
///     name "=" expression
/// ```
/// A name that is already declared reaches this point as a number, since the
/// token stream resolves it, and is rejected as a missing name.
///
/// # Errors
/// - `ParseError::ExpectedName` if no fresh identifier follows `let`.
/// - `ParseError::ExpectedAssignment` if the name is not followed by `=`.
/// - `RuntimeError::DuplicateDeclaration` from the symbol table.
/// - Any error from evaluating the value.
fn parse_declaration<R>(tokens: &mut TokenStream<R>, symbols: &mut SymbolTable) -> ParseResult<f64>
    where R: BufRead
{
    let name = match tokens.get(symbols)? {
        Token::Identifier(name) => name,
        other => {
            let line = tokens.line();
            keep_terminator(tokens, other)?;
            return Err(ParseError::ExpectedName { line }.into());
        },
    };

    let token = tokens.get(symbols)?;
    if !token.is_operator(Operator::Print) {
        let line = tokens.line();
        return Err(ParseError::ExpectedAssignment { name, line }.into());
    }

    let value = parse_expression(tokens, symbols)?;
    let line = tokens.line();
    tracing::debug!(%name, value, "declaring variable");
    Ok(symbols.declare(&name, value, line)?)
}
