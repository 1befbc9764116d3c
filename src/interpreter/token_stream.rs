use std::io::BufRead;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Lexeme,
        parser::core::ParseResult,
        symbol_table::SymbolTable,
        token::{Keyword, Operator, Token},
    },
};

/// Produces tokens on demand from a line-buffered input source.
///
/// Input is read one line at a time and lexed lazily, one lexeme per call to
/// [`get`](Self::get). Lexing lazily matters: whether a word is a variable is
/// decided against the symbol table as it is when the word is reached, so a
/// name declared by one statement is a number in the next.
///
/// A single token can be pushed back to give the grammar one token of
/// lookahead.
pub struct TokenStream<R> {
    input:       R,
    buffer:      String,
    cursor:      usize,
    line:        usize,
    pushed_back: Option<Token>,
}

impl<R: BufRead> TokenStream<R> {
    /// Creates a stream reading from `input`.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     symbol_table::SymbolTable,
    ///     token::{Operator, Token},
    ///     token_stream::TokenStream,
    /// };
    ///
    /// let symbols = SymbolTable::new();
    /// let mut tokens = TokenStream::new("1.5 * y".as_bytes());
    ///
    /// assert_eq!(tokens.get(&symbols).unwrap(), Token::Number(1.5));
    /// assert_eq!(tokens.get(&symbols).unwrap(), Token::Operator(Operator::Star));
    /// assert_eq!(tokens.get(&symbols).unwrap(), Token::Identifier("y".to_string()));
    /// assert_eq!(tokens.get(&symbols).unwrap(), Token::End);
    /// ```
    pub const fn new(input: R) -> Self {
        Self { input,
               buffer: String::new(),
               cursor: 0,
               line: 0,
               pushed_back: None }
    }

    /// The 1-based number of the line currently being read, or 0 before the
    /// first read.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token.
    ///
    /// A pushed-back token is returned first. Otherwise the next lexeme is
    /// read and words are classified in this order: reserved words become
    /// keywords, declared names become `Token::Number` carrying their current
    /// value, and anything else is an identifier. Once the input is exhausted
    /// every call returns `Token::End`.
    ///
    /// # Errors
    /// - `ParseError::BadToken` for characters that start no token, including
    ///   input bytes that are not valid UTF-8.
    /// - `Error::Io` if reading the input fails.
    pub fn get(&mut self, symbols: &SymbolTable) -> ParseResult<Token> {
        if let Some(token) = self.pushed_back.take() {
            return Ok(token);
        }

        loop {
            let next = {
                let mut lexer = Lexeme::lexer(&self.buffer[self.cursor..]);
                lexer.next().map(|lexeme| (lexeme, lexer.span()))
            };

            match next {
                Some((Ok(lexeme), span)) => {
                    self.cursor += span.end;
                    return self.classify(lexeme, symbols);
                },
                Some((Err(()), span)) => {
                    // Report and skip a single character, whatever logos matched.
                    let start = self.cursor + span.start;
                    let bad = self.buffer[start..].chars().next().unwrap_or_default();
                    self.cursor = start + bad.len_utf8();
                    return Err(ParseError::BadToken { token: bad.to_string(),
                                                      line:  self.line, }.into());
                },
                None => {
                    if !self.fill_buffer()? {
                        return Ok(Token::End);
                    }
                },
            }
        }
    }

    /// Puts a token back so the next [`get`](Self::get) returns it.
    ///
    /// # Errors
    /// `ParseError::PushbackOverflow` if a token is already buffered. The
    /// buffered token is kept.
    pub fn putback(&mut self, token: Token) -> ParseResult<()> {
        if self.pushed_back.is_some() {
            return Err(ParseError::PushbackOverflow { line: self.line }.into());
        }
        self.pushed_back = Some(token);
        Ok(())
    }

    /// Discards input up to and including the next `target` operator.
    ///
    /// If the buffered token already is `target`, dropping it is enough.
    /// Otherwise the buffered token is dropped and raw characters are skipped
    /// without lexing them, so a bad character cannot fail the recovery.
    /// Stops silently at the end of input.
    ///
    /// # Errors
    /// `Error::Io` if reading the input fails.
    pub fn ignore_until(&mut self, target: Operator) -> ParseResult<()> {
        if let Some(token) = self.pushed_back.take()
           && token.is_operator(target)
        {
            return Ok(());
        }

        let symbol = target.symbol();
        loop {
            if let Some(offset) = self.buffer[self.cursor..].find(symbol) {
                self.cursor += offset + symbol.len_utf8();
                return Ok(());
            }
            if !self.fill_buffer()? {
                return Ok(());
            }
        }
    }

    fn classify(&self, lexeme: Lexeme, symbols: &SymbolTable) -> ParseResult<Token> {
        let token = match lexeme {
            Lexeme::Number(value) => Token::Number(value),
            Lexeme::Word(word) => {
                if let Some(keyword) = Keyword::from_word(&word) {
                    Token::Keyword(keyword)
                } else if symbols.is_declared(&word) {
                    let value = symbols.lookup(&word, self.line)?;
                    tracing::trace!(name = %word, value, "resolved variable while lexing");
                    Token::Number(value)
                } else {
                    Token::Identifier(word)
                }
            },
            Lexeme::Equals => Token::Operator(Operator::Print),
            Lexeme::LParen => Token::Operator(Operator::LParen),
            Lexeme::RParen => Token::Operator(Operator::RParen),
            Lexeme::Comma => Token::Operator(Operator::Comma),
            Lexeme::Plus => Token::Operator(Operator::Plus),
            Lexeme::Minus => Token::Operator(Operator::Minus),
            Lexeme::Star => Token::Operator(Operator::Star),
            Lexeme::Slash => Token::Operator(Operator::Slash),
            Lexeme::Percent => Token::Operator(Operator::Percent),
        };
        Ok(token)
    }

    /// Replaces the buffer with the next input line. Returns `false` at end
    /// of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced by U+FFFD, which the lexer
    /// rejects as a bad token like any other stray character.
    fn fill_buffer(&mut self) -> ParseResult<bool> {
        let mut bytes = Vec::new();
        self.buffer.clear();
        self.cursor = 0;
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(false);
        }
        self.buffer = String::from_utf8_lossy(&bytes).into_owned();
        self.line += 1;
        tracing::trace!(line = self.line, "read input line");
        Ok(true)
    }
}
