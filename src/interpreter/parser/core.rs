use std::io::BufRead;

use crate::{
    error::Error,
    interpreter::{
        parser::binary::parse_additive,
        symbol_table::SymbolTable,
        token_stream::TokenStream,
    },
};

/// Result type used by the token stream and the grammar.
///
/// Grammar functions can fail with parse errors, runtime errors raised while
/// computing intermediate values, or I/O errors from the input source.
pub type ParseResult<T> = Result<T, Error>;

/// Parses and evaluates a full expression.
///
/// This is the entry point for expression evaluation. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
/// - `symbols`: Variables visible to the expression.
///
/// # Returns
/// The value of the expression. The token that ended it is pushed back.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     parser::core::parse_expression,
///     symbol_table::SymbolTable,
///     token_stream::TokenStream,
/// };
///
/// let symbols = SymbolTable::new();
/// let mut tokens = TokenStream::new("2 + 3 * 4 =".as_bytes());
/// assert_eq!(parse_expression(&mut tokens, &symbols).unwrap(), 14.0);
/// ```
pub fn parse_expression<R>(tokens: &mut TokenStream<R>, symbols: &SymbolTable) -> ParseResult<f64>
    where R: BufRead
{
    parse_additive(tokens, symbols)
}
