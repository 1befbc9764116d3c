use logos::Logos;

/// Represents a raw lexeme of the input.
///
/// The lexer only knows about the shape of the text. Deciding whether a word
/// is a keyword, a declared variable or a fresh name is left to the
/// [`TokenStream`](crate::interpreter::token_stream::TokenStream), which has
/// access to the symbol table.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\n\x0B\f\r]+")]
pub enum Lexeme {
    /// Floating-point literals, such as `3`, `3.`, `3.14`, `.5` or `2.1e-10`.
    /// A leading sign is always lexed as a separate operator.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Words: an alphabetic character followed by letters and digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which logos reports as an
///   error.
fn parse_float(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}
