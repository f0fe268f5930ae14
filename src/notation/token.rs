//! Core token types shared across the lexer, parser, and tooling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// All token kinds produced by the notation lexer.
///
/// Keyword kinds (`Superset`, `Rpe`, `Rest`, ...) are produced by a purely
/// lexical, context-free reclassification of completed words. The parser, not
/// the lexer, resolves cases where a keyword spelling was intended as part of
/// an exercise name (e.g. a word literally spelled "r").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Number,
    Multiply,
    Plus,
    Dash,
    Comma,
    Slash,
    Colon,
    At,
    Percent,
    LParen,
    RParen,
    Superset,
    Rpe,
    Rest,
    Tempo,
    Drop,
    Amrap,
    Bodyweight,
    Rm,
    WeightUnit,
    TimeUnit,
    Word,
    Newline,
    Eof,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexed token with its source text and position.
///
/// Tokens are immutable once produced; the token sequence is the sole input
/// to the notation parser. `line` and `column` are 1-based, `offset` is the
/// byte offset into the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        offset: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
            line,
            column,
        }
    }

    /// Numeric value of a `Number` token, if it parses.
    pub fn number(&self) -> Option<f64> {
        if self.kind == TokenKind::Number {
            self.text.parse().ok()
        } else {
            None
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind, self.text, self.line, self.column
        )
    }
}
