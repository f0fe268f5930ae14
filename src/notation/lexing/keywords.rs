//! Keyword reclassification table.
//!
//! A completed word is looked up here (case-insensitively, exact match) and
//! reclassified to a keyword token kind when it hits. The table is plain
//! static data built once; there is no context sensitivity at this layer.

use crate::notation::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut table = HashMap::new();
    // Letter spellings of the multiplication sign.
    table.insert("x", TokenKind::Multiply);

    table.insert("ss", TokenKind::Superset);
    table.insert("rpe", TokenKind::Rpe);
    table.insert("r", TokenKind::Rest);
    table.insert("rest", TokenKind::Rest);
    table.insert("tempo", TokenKind::Tempo);
    table.insert("drop", TokenKind::Drop);
    table.insert("dropset", TokenKind::Drop);
    table.insert("amrap", TokenKind::Amrap);
    table.insert("bw", TokenKind::Bodyweight);
    table.insert("bodyweight", TokenKind::Bodyweight);
    table.insert("rm", TokenKind::Rm);

    for unit in ["lbs", "lb", "pounds", "kg", "kgs", "kilos"] {
        table.insert(unit, TokenKind::WeightUnit);
    }
    for unit in ["s", "sec", "secs", "seconds", "min", "mins", "minutes", "m"] {
        table.insert(unit, TokenKind::TimeUnit);
    }
    table
});

/// Classify a completed word: a keyword kind on a table hit, `Word` otherwise.
pub fn classify_word(text: &str) -> TokenKind {
    KEYWORDS
        .get(text.to_lowercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Word)
}
