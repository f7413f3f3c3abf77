use std::ops::Range;

use logos::Logos;

/// Represents a lexical token in a command line.
/// A token is a minimal but meaningful unit of text produced by the scanner.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `PRINT`
    #[token("PRINT")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total`.
    /// A maximal run of letters that is not exactly `PRINT`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. The digit text is kept verbatim;
    /// range checking happens at evaluation time.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// What a single scan step produced: a recognized token, a character matching
/// no scanning rule, or the end of the input.
///
/// Unrecognized characters are carried as values rather than dropped or
/// reported immediately; they only become an error once the evaluator asks
/// for something else in their place.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Scanned {
    /// A recognized token.
    Token(Token),
    /// A character that matches no scanning rule, kept as its text.
    Unknown(String),
    /// The end of the input line.
    Eof,
}

/// The classification of a scan step, without its payload.
///
/// The evaluator's `expect` primitive compares kinds, and error messages name
/// them via the [`std::fmt::Display`] impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A variable name.
    Identifier,
    /// An integer literal.
    Integer,
    /// `=`
    Equals,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The `PRINT` keyword.
    Print,
    /// The end of the input line.
    Eof,
    /// A character matching no scanning rule.
    Unknown,
}

impl Scanned {
    /// Returns the kind of this scan step.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Token(Token::Print) => TokenKind::Print,
            Self::Token(Token::Identifier(_)) => TokenKind::Identifier,
            Self::Token(Token::Integer(_)) => TokenKind::Integer,
            Self::Token(Token::Equals) => TokenKind::Equals,
            Self::Token(Token::Plus) => TokenKind::Plus,
            Self::Token(Token::Minus) => TokenKind::Minus,
            Self::Token(Token::Star) => TokenKind::Star,
            Self::Token(Token::Slash) => TokenKind::Slash,
            Self::Token(Token::LParen) => TokenKind::LParen,
            Self::Token(Token::RParen) => TokenKind::RParen,
            Self::Unknown(_) => TokenKind::Unknown,
            Self::Eof => TokenKind::Eof,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Integer => "integer literal",
            Self::Equals => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Print => "'PRINT'",
            Self::Eof => "end of input",
            Self::Unknown => "unrecognized character",
        };
        f.write_str(name)
    }
}

/// Produces tokens from one command line on demand.
///
/// The scanner owns a cursor into the source text and moves it strictly
/// forward; each call to [`Scanner::next_token`] consumes exactly one token
/// and any whitespace before it. There is no backtracking across calls.
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `source` with the cursor at position 0.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source), }
    }

    /// Scans the next token.
    ///
    /// Once the cursor is past the end of the input, every further call
    /// returns [`Scanned::Eof`] without advancing or erroring.
    pub fn next_token(&mut self) -> Scanned {
        match self.lexer.next() {
            Some(Ok(token)) => Scanned::Token(token),
            Some(Err(())) => Scanned::Unknown(self.lexer.slice().to_string()),
            None => Scanned::Eof,
        }
    }

    /// The byte range of the most recently produced token.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.lexer.span()
    }
}
