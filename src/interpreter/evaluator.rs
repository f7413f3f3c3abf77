use std::ops::Range;

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        lexer::{Scanned, Scanner, Token, TokenKind},
        symbol_table::SymbolTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Error`] describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Recognizes and evaluates the statements of one command line.
///
/// The evaluator is a recursive-descent parser with evaluation fused in: no
/// syntax tree is built, each grammar rule computes its integer value while
/// descending. It holds exactly one lookahead token, primed at construction
/// and refilled from the scanner after every successful consume.
///
/// An evaluator is built fresh for every command line and bound to the
/// session's shared [`SymbolTable`]; assignments mutate the table in place,
/// so statements that completed before a failure keep their effect.
pub struct Evaluator<'src, 'sym> {
    scanner:   Scanner<'src>,
    symbols:   &'sym mut SymbolTable,
    lookahead: Scanned,
    span:      Range<usize>,
    output:    Vec<String>,
}

impl<'src, 'sym> Evaluator<'src, 'sym> {
    /// Creates an evaluator over `scanner`, bound to the shared symbol
    /// table, with the lookahead primed on the first token.
    #[must_use]
    pub fn new(mut scanner: Scanner<'src>, symbols: &'sym mut SymbolTable) -> Self {
        let lookahead = scanner.next_token();
        let span = scanner.span();
        Self { scanner,
               symbols,
               lookahead,
               span,
               output: Vec::new(), }
    }

    /// Drives the evaluator over the whole line.
    ///
    /// Recognizes one statement at a time until the lookahead is the end of
    /// the input, then consumes the end-of-input token itself. Returns the
    /// lines printed by `PRINT` statements, in order.
    ///
    /// # Errors
    /// Returns the first [`Error`] raised by a statement; statements after
    /// the failing one are not evaluated.
    pub fn run(mut self) -> EvalResult<Vec<String>> {
        while self.lookahead.kind() != TokenKind::Eof {
            self.statement()?;
        }
        self.expect(TokenKind::Eof)?;
        Ok(self.output)
    }

    /// Refills the lookahead with the next token from the scanner.
    fn advance(&mut self) {
        self.lookahead = self.scanner.next_token();
        self.span = self.scanner.span();
    }

    /// The 1-based column of the current lookahead token.
    fn column(&self) -> usize {
        self.span.start + 1
    }

    /// Consumes the lookahead if its kind is `expected`.
    ///
    /// This is the only consumption primitive; every grammar rule is built
    /// from it plus recursive calls.
    ///
    /// # Errors
    /// - `UnrecognizedCharacter` if the lookahead matched no scanning rule.
    /// - `UnexpectedToken`, naming the found and the expected kind,
    ///   otherwise.
    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.lookahead.kind() == expected {
            self.advance();
            return Ok(());
        }
        if let Scanned::Unknown(text) = &self.lookahead {
            return Err(ParseError::UnrecognizedCharacter { text:   text.clone(),
                                                           column: self.column(), });
        }
        Err(ParseError::UnexpectedToken { found: self.lookahead.kind(),
                                          expected,
                                          column: self.column() })
    }

    /// Recognizes and executes exactly one statement.
    ///
    /// Grammar:
    /// ```text
    /// statement := IDENTIFIER '=' expression
    ///            | 'PRINT' expression
    /// ```
    ///
    /// An assignment stores the computed value under the target name and
    /// produces no output; `PRINT` appends the value's decimal string to the
    /// output.
    fn statement(&mut self) -> EvalResult<()> {
        match self.lookahead.clone() {
            Scanned::Token(Token::Identifier(name)) => {
                self.expect(TokenKind::Identifier)?;
                self.expect(TokenKind::Equals)?;
                let value = self.expression()?;
                self.symbols.set(name, value);
                Ok(())
            },
            Scanned::Token(Token::Print) => {
                self.expect(TokenKind::Print)?;
                let value = self.expression()?;
                self.output.push(value.to_string());
                Ok(())
            },
            Scanned::Unknown(text) => {
                Err(ParseError::UnrecognizedCharacter { text,
                                                        column: self.column() }.into())
            },
            other => Err(ParseError::InvalidStatement { found:  other.kind(),
                                                        column: self.column(), }.into()),
        }
    }

    /// Evaluates an addition-level expression.
    ///
    /// Grammar: `expression := term ( ('+' | '-') term )*`
    ///
    /// Folds left to right, so `2 - 3 - 4` is `(2 - 3) - 4`.
    fn expression(&mut self) -> EvalResult<i64> {
        let mut result = self.term()?;
        loop {
            match self.lookahead.kind() {
                TokenKind::Plus => {
                    let column = self.column();
                    self.expect(TokenKind::Plus)?;
                    let rhs = self.term()?;
                    result = result.checked_add(rhs)
                                   .ok_or(RuntimeError::Overflow { column })?;
                },
                TokenKind::Minus => {
                    let column = self.column();
                    self.expect(TokenKind::Minus)?;
                    let rhs = self.term()?;
                    result = result.checked_sub(rhs)
                                   .ok_or(RuntimeError::Overflow { column })?;
                },
                _ => break,
            }
        }
        Ok(result)
    }

    /// Evaluates a multiplication-level expression.
    ///
    /// Grammar: `term := factor ( ('*' | '/') factor )*`
    ///
    /// Division truncates toward zero. A zero divisor is reported before the
    /// division is attempted; `i64::MIN / -1` is an overflow.
    fn term(&mut self) -> EvalResult<i64> {
        let mut result = self.factor()?;
        loop {
            match self.lookahead.kind() {
                TokenKind::Star => {
                    let column = self.column();
                    self.expect(TokenKind::Star)?;
                    let rhs = self.factor()?;
                    result = result.checked_mul(rhs)
                                   .ok_or(RuntimeError::Overflow { column })?;
                },
                TokenKind::Slash => {
                    let column = self.column();
                    self.expect(TokenKind::Slash)?;
                    let divisor = self.factor()?;
                    if divisor == 0 {
                        return Err(RuntimeError::DivisionByZero { column }.into());
                    }
                    result = result.checked_div(divisor)
                                   .ok_or(RuntimeError::Overflow { column })?;
                },
                _ => break,
            }
        }
        Ok(result)
    }

    /// Evaluates an atomic value.
    ///
    /// Grammar:
    /// ```text
    /// factor := INTEGER
    ///         | IDENTIFIER
    ///         | '(' expression ')'
    /// ```
    ///
    /// An integer literal's digit text is parsed here, after consumption; an
    /// identifier is looked up in the symbol table and must already hold a
    /// value.
    fn factor(&mut self) -> EvalResult<i64> {
        match self.lookahead.clone() {
            Scanned::Token(Token::Integer(text)) => {
                let column = self.column();
                self.expect(TokenKind::Integer)?;
                match text.parse::<i64>() {
                    Ok(value) => Ok(value),
                    Err(_) => Err(RuntimeError::LiteralTooLarge { text, column }.into()),
                }
            },
            Scanned::Token(Token::Identifier(name)) => {
                let column = self.column();
                self.expect(TokenKind::Identifier)?;
                match self.symbols.get(&name) {
                    Some(value) => Ok(value),
                    None => Err(RuntimeError::UnknownVariable { name, column }.into()),
                }
            },
            Scanned::Token(Token::LParen) => {
                self.expect(TokenKind::LParen)?;
                let value = self.expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(value)
            },
            Scanned::Unknown(text) => {
                Err(ParseError::UnrecognizedCharacter { text,
                                                        column: self.column() }.into())
            },
            other => Err(ParseError::ExpectedValue { found:  other.kind(),
                                                     column: self.column(), }.into()),
        }
    }
}
