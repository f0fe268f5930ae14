//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for workout
//!     notation. Lexing is two stages, each simple on its own:
//!
//!         1. Base tokenization with a logos scanner. See
//!            [base_tokenization]. Raw lexical classes only, with byte
//!            spans; no keyword knowledge.
//!
//!         2. The pipeline pass below, which skips whitespace while keeping
//!            offsets and columns exact, turns `\n` into Newline tokens that
//!            reset the column and bump the line, reclassifies completed
//!            words through the keyword table (see [keywords]), degrades
//!            unmatched characters to Unknown tokens, and terminates the
//!            stream with a single Eof token.
//!
//! Keyword Reclassification
//!
//!     Reclassification is exact, case-insensitive, and context-free. The
//!     word "r" always lexes as a Rest keyword even when the athlete meant
//!     an exercise literally named "R"; the parser owns that disambiguation
//!     because only the parser has the surrounding context. Keeping the
//!     lexer context-free keeps it trivially total: `tokenize` never fails,
//!     for any input.

pub mod base_tokenization;
pub mod keywords;

use crate::notation::token::{Token, TokenKind};
use base_tokenization::RawToken;

/// Tokenize source text into a flat, Eof-terminated token stream.
///
/// Never fails. Space, tab, and CR are skipped without emitting tokens but
/// still advance offset and column; characters the scanner cannot match
/// become `Unknown` tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 1usize;
    let mut line_start = 0usize;

    let column_at =
        |line_start: usize, offset: usize| source[line_start..offset].chars().count() + 1;

    for (raw, span) in base_tokenization::scan(source) {
        let text = &source[span.clone()];
        let column = column_at(line_start, span.start);
        match raw {
            Some(RawToken::Whitespace) => {}
            Some(RawToken::Newline) => {
                tokens.push(Token::new(TokenKind::Newline, text, span.start, line, column));
                line += 1;
                line_start = span.end;
            }
            Some(RawToken::Word) => {
                let kind = keywords::classify_word(text);
                tokens.push(Token::new(kind, text, span.start, line, column));
            }
            Some(raw) => {
                let kind = match raw {
                    RawToken::Number => TokenKind::Number,
                    RawToken::Multiply => TokenKind::Multiply,
                    RawToken::Plus => TokenKind::Plus,
                    RawToken::Dash => TokenKind::Dash,
                    RawToken::Comma => TokenKind::Comma,
                    RawToken::Slash => TokenKind::Slash,
                    RawToken::Colon => TokenKind::Colon,
                    RawToken::At => TokenKind::At,
                    RawToken::Percent => TokenKind::Percent,
                    RawToken::LParen => TokenKind::LParen,
                    RawToken::RParen => TokenKind::RParen,
                    RawToken::Newline | RawToken::Word | RawToken::Whitespace => unreachable!(),
                };
                tokens.push(Token::new(kind, text, span.start, line, column));
            }
            None => {
                tokens.push(Token::new(TokenKind::Unknown, text, span.start, line, column));
            }
        }
    }

    let end = source.len();
    tokens.push(Token::new(
        TokenKind::Eof,
        "",
        end,
        line,
        column_at(line_start, end),
    ));
    tokens
}
