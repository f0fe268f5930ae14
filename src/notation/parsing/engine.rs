//! Parse engine: guardrails, the group loop, and error recovery.

use crate::notation::ast::diagnostics::{ParseError, ParseResult, ParseSuggestion};
use crate::notation::ast::{ExerciseGroup, GroupKind, Workout};
use crate::notation::lexing::tokenize;
use crate::notation::parsing::cursor::Cursor;
use crate::notation::parsing::{groups, strategies};
use crate::notation::token::{Token, TokenKind};
use std::time::{Duration, Instant};

/// Input character ceiling; longer input is rejected with a single error.
pub const MAX_INPUT_CHARS: usize = 10_000;
/// Token stream ceiling (excluding the terminating Eof).
pub const MAX_TOKENS: usize = 5_000;
/// Wall-clock budget. This is advisory by choice: exceeding it appends a
/// warning-severity diagnostic, so the result still counts as a success and
/// carries whatever was parsed, rather than aborting with an error.
pub const PARSE_TIME_BUDGET: Duration = Duration::from_secs(2);

/// Hard ceiling on group-loop iterations. The grammar is ambiguous and
/// strategy backtracking is worst-case superlinear, so termination is a
/// contract, not an optimization.
const MAX_ITERATIONS: usize = 10_000;

/// Parse workout notation into a structured result.
///
/// Never panics and never returns an error type: oversized input, malformed
/// lines, and a blown time budget all surface as diagnostics on the
/// `ParseResult`.
pub fn parse(text: &str) -> ParseResult {
    let started = Instant::now();

    if text.trim().is_empty() {
        return ParseResult::rejected(ParseError::error(0, 1, 1, "Input is empty"));
    }
    let char_count = text.chars().count();
    if char_count > MAX_INPUT_CHARS {
        return ParseResult::rejected(ParseError::error(
            0,
            1,
            1,
            format!(
                "Input is too long: {} characters (limit {})",
                char_count, MAX_INPUT_CHARS
            ),
        ));
    }

    let tokens = tokenize(text);
    let token_count = tokens.len().saturating_sub(1); // exclude Eof
    if token_count > MAX_TOKENS {
        return ParseResult::rejected(ParseError::error(
            0,
            1,
            1,
            format!(
                "Input produced too many tokens: {} (limit {})",
                token_count, MAX_TOKENS
            ),
        ));
    }

    let mut cur = Cursor::new(&tokens);
    let mut parsed_groups: Vec<ExerciseGroup> = Vec::new();
    let mut errors: Vec<ParseError> = Vec::new();
    let mut suggestions: Vec<ParseSuggestion> = Vec::new();

    for _ in 0..MAX_ITERATIONS {
        while cur.eat(TokenKind::Newline).is_some() {}
        if cur.at_end() {
            break;
        }

        let before = cur.mark();
        match parse_group(&mut cur, &mut suggestions) {
            Some(group) => parsed_groups.push(group),
            None => {
                let (offset, line, column) = cur.position();
                let error = ParseError::error(offset, line, column, "Unrecognized workout notation")
                    .with_suggestion(failure_hint(&tokens[cur.mark()..]));
                errors.push(error);
                recover(&mut cur);
            }
        }
        // Degenerate streams must not stall the loop.
        if cur.mark() == before && !cur.at_end() {
            cur.advance();
        }
    }

    if started.elapsed() > PARSE_TIME_BUDGET {
        errors.push(ParseError::warning(
            0,
            1,
            1,
            format!(
                "Parsing exceeded the {}ms time budget; result may be incomplete",
                PARSE_TIME_BUDGET.as_millis()
            ),
        ));
    }

    if parsed_groups.is_empty() && errors.is_empty() {
        return ParseResult::rejected(ParseError::error(0, 1, 1, "No exercises found in input"));
    }
    let workout = if parsed_groups.is_empty() {
        None
    } else {
        Some(Workout {
            groups: parsed_groups,
        })
    };
    ParseResult::new(workout, errors, suggestions)
}

/// Parse one exercise group at the cursor: a lead exercise plus any `ss`/`+`
/// continuations. Returns `None` (cursor restored to the lead attempt) when
/// no strategy matches the lead.
fn parse_group(cur: &mut Cursor, suggestions: &mut Vec<ParseSuggestion>) -> Option<ExerciseGroup> {
    let lead = strategies::try_exercise(cur, false)?;
    let mut members = vec![lead];
    let mut kind = GroupKind::Single;

    loop {
        if cur.at(TokenKind::Superset) {
            let mark = cur.mark();
            cur.advance();
            match strategies::try_exercise(cur, true) {
                Some(member) => {
                    members.push(member);
                    if kind != GroupKind::Circuit {
                        kind = GroupKind::Superset;
                    }
                }
                None => {
                    cur.reset(mark);
                    break;
                }
            }
        } else if cur.at(TokenKind::Plus) {
            // One token of lookahead decides whether the + chains another
            // exercise; a bare trailing + is left unconsumed.
            let plausible = matches!(
                cur.peek_ahead(1).map(|t| t.kind),
                Some(TokenKind::Number | TokenKind::Word)
            );
            if !plausible {
                break;
            }
            let mark = cur.mark();
            cur.advance();
            match strategies::try_exercise(cur, true) {
                Some(member) => {
                    members.push(member);
                    kind = GroupKind::Circuit;
                }
                None => {
                    cur.reset(mark);
                    break;
                }
            }
        } else {
            break;
        }
    }

    groups::assemble(members, kind, suggestions)
}

/// Skip to the next recovery point (newline, `+`, or `ss`) and consume it,
/// so the next loop iteration starts on fresh ground.
fn recover(cur: &mut Cursor) {
    while !matches!(
        cur.kind(),
        TokenKind::Newline | TokenKind::Plus | TokenKind::Superset | TokenKind::Eof
    ) {
        cur.advance();
    }
    if !cur.at_end() {
        cur.advance();
    }
}

/// A best-effort hint derived from which token kinds are present on the
/// failed stretch, up to the next newline.
fn failure_hint(rest: &[Token]) -> String {
    let line: Vec<&Token> = rest
        .iter()
        .take_while(|t| !matches!(t.kind, TokenKind::Newline | TokenKind::Eof))
        .collect();
    let has_number = line.iter().any(|t| t.kind == TokenKind::Number);
    let has_multiply = line.iter().any(|t| t.kind == TokenKind::Multiply);
    let has_word = line.iter().any(|t| t.kind == TokenKind::Word);

    if has_number && !has_multiply {
        "Link sets and reps with a multiply sign, e.g. \"3x10 Squat\"".to_string()
    } else if has_multiply && !has_number {
        "Put counts around the multiply sign, e.g. \"3x10 Squat\"".to_string()
    } else if has_word && !has_number {
        "Start the line with sets and reps, e.g. \"3x10 Bench Press\"".to_string()
    } else {
        "Use SETSxREPS followed by the exercise name, e.g. \"5x5 Squat\"".to_string()
    }
}
