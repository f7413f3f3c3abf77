/// The evaluator module recognizes statements and computes results.
///
/// The evaluator consumes tokens one at a time with a single lookahead,
/// recognizes statements and expressions by recursive descent, and evaluates
/// inline while descending; no syntax tree is materialized. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Recognizes assignment and `PRINT` statements.
/// - Evaluates arithmetic with standard precedence and left associativity.
/// - Reports syntax errors and runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes a command line for the evaluator.
///
/// The lexer (scanner) reads the raw line and produces tokens on demand,
/// each corresponding to a meaningful language element such as a number, an
/// identifier, an operator, or the `PRINT` keyword. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Skips whitespace between tokens; carries unrecognized characters
///   through as values instead of dropping them.
/// - Reports the source range of each token for error messages.
pub mod lexer;
/// The session module ties one symbol table to many command lines.
///
/// A session owns the state that persists between commands and constructs
/// the per-line scanner and evaluator. It is the public entry point for
/// embedding the interpreter.
///
/// # Responsibilities
/// - Owns the symbol table for the lifetime of the session.
/// - Evaluates one line at a time, returning its printed output.
/// - Keeps accepting lines after a failed command.
pub mod session;
/// The symbol table module stores variable bindings.
///
/// # Responsibilities
/// - Maps case-sensitive variable names to their last assigned value.
/// - Upserts on assignment; never defaults a missing variable.
pub mod symbol_table;
