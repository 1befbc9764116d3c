#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to declare a name that is already in the symbol table.
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read or overwrite a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivideByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted a remainder with a zero divisor.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to take the square root of a negative number.
    NegativeSqrt {
        /// The rejected operand.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The exponent given to `pow` does not fit a 32-bit integer.
    ExponentOutOfRange {
        /// The rejected exponent.
        value: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the input line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DuplicateDeclaration { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::DivideByZero { line }
            | Self::ModuloByZero { line }
            | Self::NegativeSqrt { line, .. }
            | Self::ExponentOutOfRange { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateDeclaration { name, line } => {
                write!(f, "Error on line {line}: '{name}' declared twice.")
            },
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::DivideByZero { line } => write!(f, "Error on line {line}: Divide by zero."),
            Self::ModuloByZero { line } => write!(f, "Error on line {line}: '%': divide by zero."),
            Self::NegativeSqrt { value, line } => write!(f,
                                                         "Error on line {line}: Cannot take the square root of negative value {value}."),
            Self::ExponentOutOfRange { value, line } => write!(f,
                                                               "Error on line {line}: Exponent {value} does not fit in a 32-bit integer."),
        }
    }
}

impl std::error::Error for RuntimeError {}
