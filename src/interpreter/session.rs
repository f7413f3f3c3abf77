use crate::{
    error::Error,
    interpreter::{evaluator::Evaluator, lexer::Scanner, symbol_table::SymbolTable},
};

/// An interactive calculator session.
///
/// The session owns the [`SymbolTable`] that outlives any single command;
/// every submitted line gets a fresh [`Scanner`] and a fresh [`Evaluator`]
/// bound to that shared table. One bad line does not end the session.
pub struct Session {
    symbols: SymbolTable,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session with an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { symbols: SymbolTable::new(), }
    }

    /// Evaluates one command line against the session state.
    ///
    /// Returns the lines printed by `PRINT` statements, in order; an empty
    /// vector when the line printed nothing. A blank line is a no-op. A line
    /// may hold several statements; they run left to right, and assignments
    /// that completed before an error keep their effect on the symbol table.
    ///
    /// # Errors
    /// Returns the first [`Error`] the line raised. The session remains
    /// usable afterwards.
    ///
    /// # Examples
    /// ```
    /// use tally::Session;
    ///
    /// let mut session = Session::new();
    ///
    /// session.eval_line("x = 2 + 3").unwrap();
    /// assert_eq!(session.eval_line("PRINT x * 2").unwrap(), vec!["10"]);
    ///
    /// // 'y' was never assigned: the line fails, the session survives.
    /// assert!(session.eval_line("PRINT y").is_err());
    /// assert_eq!(session.eval_line("PRINT x").unwrap(), vec!["5"]);
    /// ```
    pub fn eval_line(&mut self, line: &str) -> Result<Vec<String>, Error> {
        let scanner = Scanner::new(line);
        Evaluator::new(scanner, &mut self.symbols).run()
    }

    /// The variables assigned so far in this session.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}
