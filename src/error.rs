/// Parsing errors.
///
/// Defines all error types that can occur while turning input characters into
/// tokens and tokens into statements: bad characters, a misused pushback
/// buffer and missing punctuation or names.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a value or
/// touching the symbol table, such as division by zero or an undefined
/// variable.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure that can end the evaluation of a statement.
///
/// Parse and runtime errors abort only the current statement. An `Io` error
/// means the input or output stream itself failed and ends the session.
pub enum Error {
    /// A lexing or grammar error.
    Parse(ParseError),
    /// An evaluation error.
    Runtime(RuntimeError),
    /// Reading input or writing output failed.
    Io(std::io::Error),
}

impl Error {
    /// Returns `true` when the session cannot continue after this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
