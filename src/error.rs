/// Parsing errors.
///
/// Defines all error types that can occur while scanning and recognizing a
/// command line. Parse errors include unexpected tokens, characters that
/// match no scanning rule, and statements that match no statement form.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a recognized command is
/// evaluated. Runtime errors include reads of unassigned variables, division
/// by zero, and arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any error produced while evaluating one command line.
///
/// Parsing and evaluation are fused, so both families of failure can surface
/// from the same call; this enum lets the caller hold either and decide how
/// to report it. Every variant aborts only the current line; the session
/// stays usable.
pub enum Error {
    /// The line failed while being recognized.
    Parse(ParseError),
    /// The line was well-formed but failed during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::Runtime(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
