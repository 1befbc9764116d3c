#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A character sequence that does not start any known token.
    BadToken {
        /// The offending text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token was pushed back while another one was still buffered.
    PushbackOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific punctuation token was required but something else was
    /// found.
    ExpectedToken {
        /// The character that was expected, such as `)` or `,`.
        expected: char,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No number, parenthesis, sign or function call could start a primary.
    ExpectedPrimary {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `let` was not followed by a fresh name.
    ExpectedName {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The name in a declaration was not followed by `=`.
    ExpectedAssignment {
        /// The name being declared.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the input line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::BadToken { line, .. }
            | Self::PushbackOverflow { line }
            | Self::ExpectedToken { line, .. }
            | Self::ExpectedPrimary { line }
            | Self::ExpectedName { line }
            | Self::ExpectedAssignment { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken { token, line } => {
                write!(f, "Error on line {line}: Bad token '{token}'.")
            },

            Self::PushbackOverflow { line } => {
                write!(f, "Error on line {line}: putback() into a full buffer.")
            },

            Self::ExpectedToken { expected, line } => {
                write!(f, "Error on line {line}: '{expected}' expected.")
            },

            Self::ExpectedPrimary { line } => write!(f, "Error on line {line}: Primary expected."),

            Self::ExpectedName { line } => {
                write!(f, "Error on line {line}: Name expected in declaration.")
            },

            Self::ExpectedAssignment { name, line } => write!(f,
                                                              "Error on line {line}: '=' missing in declaration of '{name}'."),
        }
    }
}

impl std::error::Error for ParseError {}
