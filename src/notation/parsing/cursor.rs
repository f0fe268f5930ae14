//! Backtracking cursor over the token stream.
//!
//! Strategies take the cursor, consume freely, and either commit or reset to
//! a saved mark. No exceptions as control flow: a failed attempt is an
//! explicit `None` plus a `reset`.

use crate::notation::token::{Token, TokenKind};

#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Current position, for `reset` after a failed attempt.
    pub fn mark(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self, mark: usize) {
        self.pos = mark;
    }

    /// The token at the cursor. The stream is Eof-terminated, so this only
    /// returns `None` past the end of the buffer itself.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_ahead(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    pub fn kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::Eof, |t| t.kind)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    pub fn at_end(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        Some(token)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.at(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume a Number token and return its parsed value.
    pub fn eat_number(&mut self) -> Option<f64> {
        if self.at(TokenKind::Number) {
            let value = self.peek()?.number()?;
            self.advance();
            Some(value)
        } else {
            None
        }
    }

    /// Source position of the current token, for diagnostics.
    pub fn position(&self) -> (usize, usize, usize) {
        match self.peek() {
            Some(t) => (t.offset, t.line, t.column),
            None => (0, 1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::lexing::tokenize;

    #[test]
    fn test_mark_and_reset() {
        let tokens = tokenize("5x10 Squat");
        let mut cur = Cursor::new(&tokens);
        let mark = cur.mark();
        assert!(cur.eat(TokenKind::Number).is_some());
        assert!(cur.eat(TokenKind::Multiply).is_some());
        cur.reset(mark);
        assert!(cur.at(TokenKind::Number));
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let tokens = tokenize("5");
        let mut cur = Cursor::new(&tokens);
        cur.advance();
        assert!(cur.at_end());
        // Advancing at Eof keeps returning the Eof token without moving.
        assert_eq!(cur.advance().unwrap().kind, TokenKind::Eof);
        assert_eq!(cur.advance().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_eat_number_value() {
        let tokens = tokenize("2.5 kg");
        let mut cur = Cursor::new(&tokens);
        assert_eq!(cur.eat_number(), Some(2.5));
        assert!(cur.at(TokenKind::WeightUnit));
        assert_eq!(cur.eat_number(), None);
    }
}
