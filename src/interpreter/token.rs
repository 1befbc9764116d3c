/// Single-character operators and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `=`, which ends a statement and also separates a declared name from
    /// its value.
    Print,
}

impl Operator {
    /// Returns the character this operator is written as.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Print.symbol(), '=');
    /// assert_eq!(Operator::RParen.symbol(), ')');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
            Self::LParen => '(',
            Self::RParen => ')',
            Self::Comma => ',',
            Self::Print => '=',
        }
    }
}

/// Reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `let`
    Let,
    /// `exit`
    Quit,
    /// `pow`
    Pow,
    /// `sqrt`
    Sqrt,
}

impl Keyword {
    /// Maps a word to its keyword. Matching is case-sensitive.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::token::Keyword;
    ///
    /// assert_eq!(Keyword::from_word("exit"), Some(Keyword::Quit));
    /// assert_eq!(Keyword::from_word("Let"), None);
    /// assert_eq!(Keyword::from_word("x"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "let" => Some(Self::Let),
            "exit" => Some(Self::Quit),
            "pow" => Some(Self::Pow),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }
}

/// A classified token, as handed to the grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A literal, or a declared variable already replaced by its value.
    Number(f64),
    /// A word that is neither reserved nor declared.
    Identifier(String),
    Operator(Operator),
    Keyword(Keyword),
    /// The input source has no more characters.
    End,
}

impl Token {
    /// Returns `true` if this token is the given operator.
    #[must_use]
    pub fn is_operator(&self, op: Operator) -> bool {
        matches!(self, Self::Operator(found) if *found == op)
    }

    /// Returns `true` if this token ends the session when it starts a
    /// statement: `exit`, the bare name `x`, or the end of input.
    ///
    /// `x` is an ordinary name everywhere else, so it can be declared. Once it
    /// is, it reaches the grammar as a number and no longer quits.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::token::{Keyword, Token};
    ///
    /// assert!(Token::Keyword(Keyword::Quit).is_quit());
    /// assert!(Token::Identifier("x".to_string()).is_quit());
    /// assert!(!Token::Identifier("xs".to_string()).is_quit());
    /// assert!(!Token::Number(5.0).is_quit());
    /// ```
    #[must_use]
    pub fn is_quit(&self) -> bool {
        match self {
            Self::Keyword(Keyword::Quit) | Self::End => true,
            Self::Identifier(name) => name == "x",
            _ => false,
        }
    }
}
