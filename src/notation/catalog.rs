//! Exercise name canonicalizer.
//!
//!     Maps free-text exercise names onto the controlled vocabulary in
//!     [vocabulary]. Lookup is exact-first against a lower-cased reverse
//!     index (alias -> canonical, built once), then fuzzy over the entire
//!     index using normalized Levenshtein similarity:
//!
//!         similarity(a, b) = 1 - edit_distance(a, b) / max(len(a), len(b))
//!
//!     with distance measured over Unicode code points. `find_exercise`
//!     accepts the best hit at or above 0.7; `suggestions` casts a wider net
//!     at 0.5 with boosts for containment and whole-word hits.
//!
//! Cost
//!
//!     The fuzzy path is a brute-force scan of the whole index, O(index size
//!     x edit distance). Fine at this vocabulary size; a much larger catalog
//!     would want a trigram index in front of it.

pub mod vocabulary;

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Acceptance threshold for `find_exercise`'s fuzzy path.
const MATCH_THRESHOLD: f64 = 0.7;
/// Wider threshold used when ranking suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.5;
/// Score assigned when one side contains the other as a substring.
const CONTAINMENT_SCORE: f64 = 0.8;
/// Score assigned on an exact whole-word hit.
const WORD_MATCH_SCORE: f64 = 0.9;

/// Lower-cased alias -> canonical name, including each canonical as its own
/// alias. Built once.
static REVERSE_INDEX: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    let mut index = Vec::new();
    for (canonical, aliases) in vocabulary::VOCABULARY {
        index.push((canonical.to_lowercase(), *canonical));
        for alias in *aliases {
            index.push((alias.to_lowercase(), *canonical));
        }
    }
    index
});

static EXACT_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (canonical, aliases) in vocabulary::VOCABULARY {
        map.insert(*canonical, *canonical);
        for alias in *aliases {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Trim, lower-case, and collapse internal whitespace.
fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Levenshtein distance over Unicode code points.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized similarity in 0..=1. Empty-vs-empty counts as identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / longest as f64
}

/// Resolve a free-text name to its canonical form.
///
/// Exact (normalized) index hit first; otherwise the best fuzzy hit across
/// the whole index at or above the 0.7 acceptance threshold.
pub fn find_exercise(name: &str) -> Option<&'static str> {
    let normalized = normalize(name);
    if normalized.is_empty() {
        return None;
    }
    if let Some(canonical) = EXACT_INDEX.get(normalized.as_str()) {
        return Some(canonical);
    }

    let mut best: Option<(&'static str, f64)> = None;
    for (alias, canonical) in REVERSE_INDEX.iter() {
        let score = similarity(&normalized, alias);
        if score >= MATCH_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
            best = Some((canonical, score));
        }
    }
    best.map(|(canonical, _)| canonical)
}

/// Ranked canonical-name suggestions for a free-text name.
///
/// Scores are the fuzzy similarity, boosted to 0.8 when one side contains
/// the other and 0.9 on an exact whole-word hit against the alias or any
/// word of the canonical name. Deduplicated per canonical keeping the best
/// score, sorted descending, capped at `max`.
pub fn suggestions(name: &str, max: usize) -> Vec<(&'static str, f64)> {
    let normalized = normalize(name);
    if normalized.is_empty() || max == 0 {
        return Vec::new();
    }

    let mut best_per_canonical: HashMap<&'static str, f64> = HashMap::new();
    for (alias, canonical) in REVERSE_INDEX.iter() {
        let mut score = similarity(&normalized, alias);
        if alias.contains(&normalized) || normalized.contains(alias.as_str()) {
            score = score.max(CONTAINMENT_SCORE);
        }
        let word_hit = alias.split_whitespace().any(|w| w == normalized)
            || canonical.split_whitespace().any(|w| w == normalized);
        if word_hit {
            score = score.max(WORD_MATCH_SCORE);
        }
        if score >= SUGGESTION_THRESHOLD {
            let entry = best_per_canonical.entry(canonical).or_insert(score);
            if score > *entry {
                *entry = score;
            }
        }
    }

    let mut ranked: Vec<(&'static str, f64)> = best_per_canonical.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(max);
    ranked
}

/// Whether any contiguous word window of `text` resolves to a known
/// exercise.
pub fn contains_exercise(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    for start in 0..words.len() {
        for end in start + 1..=words.len() {
            if find_exercise(&words[start..end].join(" ")).is_some() {
                return true;
            }
        }
    }
    false
}
