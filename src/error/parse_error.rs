use crate::interpreter::lexer::TokenKind;

#[derive(Debug)]
/// Represents all errors that can occur while recognizing a command line.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// The kind of token encountered.
        found:    TokenKind,
        /// The kind of token the grammar required here.
        expected: TokenKind,
        /// The 1-based column where the error occurred.
        column:   usize,
    },
    /// A character in the input matched no scanning rule.
    UnrecognizedCharacter {
        /// The offending character's text.
        text:   String,
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// A statement began with a token that starts no statement form.
    InvalidStatement {
        /// The kind of token encountered.
        found:  TokenKind,
        /// The 1-based column where the error occurred.
        column: usize,
    },
    /// An expression needed a value, but the next token cannot start one.
    ExpectedValue {
        /// The kind of token encountered.
        found:  TokenKind,
        /// The 1-based column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    column, } => {
                write!(f,
                       "Error at column {column}: Unexpected token: found {found}, expected {expected}.")
            },

            Self::UnrecognizedCharacter { text, column } => {
                write!(f, "Error at column {column}: Unrecognized character '{text}'.")
            },

            Self::InvalidStatement { found, column } => write!(f,
                                                               "Error at column {column}: Expected an assignment or 'PRINT', found {found}."),

            Self::ExpectedValue { found, column } => write!(f,
                                                            "Error at column {column}: Expected an integer literal, identifier or '(', found {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
