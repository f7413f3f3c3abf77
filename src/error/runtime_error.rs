#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned in this session.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// Arithmetic operation overflowed the 64-bit integer range.
    Overflow {
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// The literal's digit text.
        text:   String,
        /// The 1-based column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, column } => {
                write!(f, "Error at column {column}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::Overflow { column } => write!(f,
                                                "Error at column {column}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { text, column } => {
                write!(f, "Error at column {column}: Literal '{text}' is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
