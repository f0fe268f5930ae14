//! Base tokenization using a logos lexer.
//!
//! This stage knows nothing about keywords: it splits the source into raw
//! lexical classes (numbers, words, punctuation, whitespace) with byte spans.
//! Keyword reclassification and position tracking happen in the pipeline
//! stage on top of this output.

use logos::Logos;
use std::ops::Range;

/// Raw lexical classes recognized by the scanner.
///
/// `Multiply` only covers the symbol spellings here; the letter spellings
/// (`x`, `X`) lex as `Word` and are reclassified by the keyword table.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    // Digits with at most one decimal point; "2.5" is a single number.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token("×")]
    #[token("*")]
    Multiply,

    #[token("+")]
    Plus,
    #[token("-")]
    Dash,
    #[token(",")]
    Comma,
    #[token("/")]
    Slash,
    #[token(":")]
    Colon,
    #[token("@")]
    At,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("\n")]
    Newline,

    // Contiguous letters plus apostrophe ("farmer's").
    #[regex(r"[A-Za-z']+")]
    Word,

    // Space, tab, and carriage return are skipped by the pipeline but must
    // still be spanned so offsets and columns stay exact.
    #[regex(r"[ \t\r]+")]
    Whitespace,
}

/// Scan the source into `(raw, span)` pairs.
///
/// Never fails: characters logos cannot match are returned as `None` raws and
/// degrade to `Unknown` tokens downstream.
pub fn scan(source: &str) -> Vec<(Option<RawToken>, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        out.push((result.ok(), lexer.span()));
    }
    out
}
