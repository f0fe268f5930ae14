//! Notation strategies.
//!
//!     An exercise is parsed by trying a fixed, prioritized list of
//!     independent strategies at the cursor. Each strategy is a pure
//!     function over the cursor: it may consume freely while attempting its
//!     shape, but on failure it resets to its entry mark and returns `None`
//!     so the next strategy sees an untouched stream. Only a success commits
//!     cursor advancement.
//!
//!     The fixed order:
//!
//!         1. standard        5x10 Squat
//!         2. weight_first    225 3x5 Squat
//!         3. at_notation     3x5 @225 Squat / 3x5 @80% Squat
//!         4. slash           12/10/8 Curls          (drop set)
//!         5. comma           225x5,5,3 Bench        (varying reps)
//!         6. complex         5x Incline DB (2x failure @85lbs) (3x8-10 @75lbs)
//!
//!     A seventh shape, `continuation`, is only tried for the second and
//!     later members of a superset/circuit: a bare name, optionally led by a
//!     rep count, whose missing set count (and rep scheme) is inherited from
//!     the group's first exercise during assembly.

use crate::notation::ast::{ExerciseSet, Reps, Weight};
use crate::notation::parsing::cursor::Cursor;
use crate::notation::parsing::modifiers::{
    eat_weight_unit, parse_count, parse_modifiers, parse_reps, parse_weight, Modifiers,
};
use crate::notation::token::TokenKind;

/// Name extraction is capped to bound cost on degenerate input.
const MAX_NAME_WORDS: usize = 10;

/// Upper sanity bound on a stated set count; anything above fails the
/// strategy rather than allocating an absurd plan.
const MAX_SETS: u32 = 200;

/// The raw output of one strategy, before group assembly canonicalizes the
/// name and resolves inheritance.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExercise {
    pub raw_name: String,
    /// Fully built sets. Empty only for the `continuation` shape.
    pub sets: Vec<ExerciseSet>,
    /// Reps stated without a set count (continuation shape only).
    pub pending_reps: Option<Reps>,
    /// Kept for assembly so inherited sets still get this member's
    /// modifiers.
    pub modifiers: Modifiers,
    pub notes: Vec<String>,
    pub dropset: bool,
    pub explicit_sets: bool,
    pub explicit_reps: bool,
}

impl ParsedExercise {
    fn from_sets(raw_name: String, sets: Vec<ExerciseSet>, modifiers: Modifiers) -> Self {
        Self {
            raw_name,
            sets,
            pending_reps: None,
            dropset: modifiers.dropset,
            modifiers,
            notes: Vec::new(),
            explicit_sets: true,
            explicit_reps: true,
        }
    }
}

/// Try every strategy in order at the cursor. `continuation` additionally
/// enables the bare-name shape used after `ss`/`+`.
pub fn try_exercise(cur: &mut Cursor, continuation: bool) -> Option<ParsedExercise> {
    let attempts: &[fn(&mut Cursor) -> Option<ParsedExercise>] = &[
        standard,
        weight_first,
        at_notation,
        slash,
        comma,
        complex,
    ];
    for attempt in attempts {
        if let Some(parsed) = attempt(cur) {
            return Some(parsed);
        }
    }
    if continuation {
        return bare_continuation(cur);
    }
    None
}

/// Strategy 1: `SETS x REPS name [modifiers]`.
pub fn standard(cur: &mut Cursor) -> Option<ParsedExercise> {
    let mark = cur.mark();
    let result = (|| {
        let sets = parse_set_count(cur)?;
        cur.eat(TokenKind::Multiply)?;
        let reps = parse_reps(cur)?;
        let name = extract_name(cur);
        if name.is_empty() {
            return None;
        }
        let mods = parse_modifiers(cur);
        let sets = build_sets(sets, reps, None, &mods);
        Some(ParsedExercise::from_sets(name, sets, mods))
    })();
    if result.is_none() {
        cur.reset(mark);
    }
    result
}

/// Strategy 2: `WEIGHT [unit] SETS x REPS name [modifiers]`.
pub fn weight_first(cur: &mut Cursor) -> Option<ParsedExercise> {
    let mark = cur.mark();
    let result = (|| {
        let value = cur.eat_number()?;
        let unit = eat_weight_unit(cur);
        let sets = parse_set_count(cur)?;
        cur.eat(TokenKind::Multiply)?;
        let reps = parse_reps(cur)?;
        let name = extract_name(cur);
        if name.is_empty() {
            return None;
        }
        let mods = parse_modifiers(cur);
        let weight = Weight::absolute(value, unit);
        let sets = build_sets(sets, reps, Some(weight), &mods);
        Some(ParsedExercise::from_sets(name, sets, mods))
    })();
    if result.is_none() {
        cur.reset(mark);
    }
    result
}

/// Strategy 3: `SETS x REPS @ WEIGHT name [modifiers]`, where the weight may
/// be a percentage of 1RM (`@80%`) instead of an absolute load.
pub fn at_notation(cur: &mut Cursor) -> Option<ParsedExercise> {
    let mark = cur.mark();
    let result = (|| {
        let sets = parse_set_count(cur)?;
        cur.eat(TokenKind::Multiply)?;
        let reps = parse_reps(cur)?;
        cur.eat(TokenKind::At)?;
        let weight = parse_weight(cur)?;
        let name = extract_name(cur);
        if name.is_empty() {
            return None;
        }
        let mods = parse_modifiers(cur);
        let sets = build_sets(sets, reps, Some(weight), &mods);
        Some(ParsedExercise::from_sets(name, sets, mods))
    })();
    if result.is_none() {
        cur.reset(mark);
    }
    result
}

/// Strategy 4: `REPS (/ REPS)+ name [modifiers]` - a drop set with one set
/// per slash-separated count.
pub fn slash(cur: &mut Cursor) -> Option<ParsedExercise> {
    let mark = cur.mark();
    let result = (|| {
        let first = parse_count(cur)?;
        if !cur.at(TokenKind::Slash) {
            return None;
        }
        let mut counts = vec![first];
        while cur.eat(TokenKind::Slash).is_some() {
            counts.push(parse_count(cur)?);
        }
        if counts.len() < 2 {
            return None;
        }
        let name = extract_name(cur);
        if name.is_empty() {
            return None;
        }
        let mods = parse_modifiers(cur);
        let sets = counts
            .iter()
            .map(|&n| {
                let mut set = ExerciseSet::new(Reps::fixed(n));
                mods.apply(&mut set);
                set
            })
            .collect();
        let mut parsed = ParsedExercise::from_sets(name, sets, mods);
        parsed.dropset = true;
        Some(parsed)
    })();
    if result.is_none() {
        cur.reset(mark);
    }
    result
}

/// Strategy 5: `WEIGHT x REPS (, REPS)+ name [modifiers]` - one lift at a
/// fixed load with varying reps per set. A later set with strictly fewer
/// reps than the first is flagged `failed`.
pub fn comma(cur: &mut Cursor) -> Option<ParsedExercise> {
    let mark = cur.mark();
    let result = (|| {
        let value = cur.eat_number()?;
        let unit = eat_weight_unit(cur);
        cur.eat(TokenKind::Multiply)?;
        let first = parse_count(cur)?;
        if !cur.at(TokenKind::Comma) {
            return None;
        }
        let mut counts = vec![first];
        while cur.eat(TokenKind::Comma).is_some() {
            counts.push(parse_count(cur)?);
        }
        let name = extract_name(cur);
        if name.is_empty() {
            return None;
        }
        let mods = parse_modifiers(cur);
        let weight = Weight::absolute(value, unit);
        let sets = counts
            .iter()
            .map(|&n| {
                let mut set = ExerciseSet::new(Reps::fixed(n));
                set.weight = Some(weight.clone());
                set.failed = n < first;
                mods.apply(&mut set);
                set
            })
            .collect();
        Some(ParsedExercise::from_sets(name, sets, mods))
    })();
    if result.is_none() {
        cur.reset(mark);
    }
    result
}

/// Strategy 6: `SETS x name (clause)*` where the outer count is the total
/// number of sets and each parenthesized clause describes a contiguous slice
/// of them: an optional sub-count, a rep scheme or the literal
/// `failure`/`fail` (mapped to AMRAP with a note), and an optional weight.
/// Sets no clause covers default to 10 reps; with no clauses at all, every
/// set defaults to 10 reps.
pub fn complex(cur: &mut Cursor) -> Option<ParsedExercise> {
    let mark = cur.mark();
    let result = (|| {
        let total = parse_set_count(cur)?;
        cur.eat(TokenKind::Multiply)?;
        let name = extract_name(cur);
        if name.is_empty() {
            return None;
        }

        let mut clauses = Vec::new();
        while cur.at(TokenKind::LParen) {
            clauses.push(parse_sub_clause(cur)?);
        }
        let mods = parse_modifiers(cur);

        let mut sets: Vec<ExerciseSet> = Vec::new();
        let mut notes = Vec::new();
        for clause in &clauses {
            if sets.len() >= total as usize {
                break;
            }
            let remaining = total as usize - sets.len();
            let take = clause
                .count
                .map_or(remaining, |n| (n as usize).min(remaining));
            for _ in 0..take {
                let mut set = ExerciseSet::new(clause.reps);
                set.weight = clause.weight.clone();
                mods.apply(&mut set);
                sets.push(set);
            }
            if let Some(note) = &clause.note {
                if !notes.contains(note) {
                    notes.push(note.clone());
                }
            }
        }
        while sets.len() < total as usize {
            let mut set = ExerciseSet::new(Reps::fixed(10));
            mods.apply(&mut set);
            sets.push(set);
        }

        let explicit_reps = !clauses.is_empty();
        let mut parsed = ParsedExercise::from_sets(name, sets, mods);
        parsed.notes = notes;
        parsed.explicit_reps = explicit_reps;
        Some(parsed)
    })();
    if result.is_none() {
        cur.reset(mark);
    }
    result
}

/// Continuation shape for superset/circuit members: `[REPS] name
/// [modifiers]` with no set count. Assembly inherits the missing pieces
/// from the group's first exercise.
pub fn bare_continuation(cur: &mut Cursor) -> Option<ParsedExercise> {
    let mark = cur.mark();
    let result = (|| {
        let reps_mark = cur.mark();
        let mut pending_reps = parse_reps(cur);
        // A count followed by a multiply sign is somebody else's notation.
        if pending_reps.is_some() && cur.at(TokenKind::Multiply) {
            cur.reset(reps_mark);
            pending_reps = None;
        }
        let name = extract_name(cur);
        if name.is_empty() {
            return None;
        }
        let mods = parse_modifiers(cur);
        Some(ParsedExercise {
            raw_name: name,
            sets: Vec::new(),
            pending_reps,
            dropset: mods.dropset,
            modifiers: mods,
            notes: Vec::new(),
            explicit_sets: false,
            explicit_reps: pending_reps.is_some(),
        })
    })();
    if result.is_none() {
        cur.reset(mark);
    }
    result
}

/// One parenthesized sub-clause of the complex strategy.
#[derive(Debug, Clone)]
struct SubClause {
    count: Option<u32>,
    reps: Reps,
    weight: Option<Weight>,
    note: Option<String>,
}

fn parse_sub_clause(cur: &mut Cursor) -> Option<SubClause> {
    cur.eat(TokenKind::LParen)?;

    let mut count = None;
    if cur.at(TokenKind::Number)
        && cur.peek_ahead(1).map(|t| t.kind) == Some(TokenKind::Multiply)
    {
        count = Some(parse_count(cur)?);
        cur.advance(); // the multiply sign
    }

    let (reps, note) = if is_failure_word(cur) {
        cur.advance();
        (Reps::Amrap, Some("to failure".to_string()))
    } else if cur.eat(TokenKind::Amrap).is_some() {
        (Reps::Amrap, None)
    } else {
        (parse_reps(cur)?, None)
    };

    let mut weight = None;
    if cur.eat(TokenKind::At).is_some() {
        weight = Some(parse_weight(cur)?);
    } else if cur.at(TokenKind::Number) || cur.at(TokenKind::Bodyweight) {
        weight = parse_weight(cur);
    }

    cur.eat(TokenKind::RParen)?;
    Some(SubClause {
        count,
        reps,
        weight,
        note,
    })
}

fn is_failure_word(cur: &Cursor) -> bool {
    cur.peek().is_some_and(|t| {
        t.kind == TokenKind::Word && matches!(t.text.to_lowercase().as_str(), "failure" | "fail")
    })
}

/// A set count with the sanity cap applied.
fn parse_set_count(cur: &mut Cursor) -> Option<u32> {
    let mark = cur.mark();
    let count = parse_count(cur)?;
    if count == 0 || count > MAX_SETS {
        cur.reset(mark);
        return None;
    }
    Some(count)
}

/// Extract the raw exercise name at the cursor.
///
/// Collects words (plus dashes between words and numbers that are not the
/// start of the next exercise's `NxM`), stopping at the fixed boundary set
/// and at the word cap.
pub fn extract_name(cur: &mut Cursor) -> String {
    let mut words: Vec<String> = Vec::new();
    while words.len() < MAX_NAME_WORDS {
        match cur.kind() {
            TokenKind::Word => {
                words.push(cur.advance().map(|t| t.text.clone()).unwrap_or_default());
            }
            TokenKind::Dash if !words.is_empty() => {
                // Hyphenated names ("t-bar row"); the dash itself is dropped.
                cur.advance();
            }
            TokenKind::Number => {
                // A number leading into NxM starts the next exercise.
                if cur.peek_ahead(1).map(|t| t.kind) == Some(TokenKind::Multiply) {
                    break;
                }
                if words.is_empty() {
                    break;
                }
                words.push(cur.advance().map(|t| t.text.clone()).unwrap_or_default());
            }
            _ => break,
        }
    }
    words.join(" ")
}

fn build_sets(count: u32, reps: Reps, weight: Option<Weight>, mods: &Modifiers) -> Vec<ExerciseSet> {
    (0..count)
        .map(|_| {
            let mut set = ExerciseSet::new(reps);
            set.weight = weight.clone();
            mods.apply(&mut set);
            set
        })
        .collect()
}
