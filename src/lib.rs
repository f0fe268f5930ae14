//! # repscript
//!
//! A parser for free-text workout notation.
//!
//! Turns descriptions like `5x5 Squat @225lbs ss 3x10 pushups` into a
//! structured, strongly typed workout plan: sets, reps, weight, tempo, rest,
//! and superset/circuit grouping. The grammar is ambiguous and overloaded,
//! so parsing is a prioritized list of backtracking notation strategies over
//! a flat token stream, with per-line error recovery, bounded running time,
//! and fuzzy reconciliation of exercise names against a controlled
//! vocabulary.
//!
//! The only entry point downstream code depends on is [`parse`], which
//! never fails as a function: every failure mode is a diagnostic inside the
//! returned [`ParseResult`]. The pre-parse [`validate`](notation::validation::validate)
//! pass and the async [`ParserHost`](notation::host::ParserHost) are
//! auxiliary surfaces around the same core.

pub mod notation;

pub use notation::ast::diagnostics::{ParseError, ParseResult, ParseSuggestion, Severity};
pub use notation::ast::{
    Exercise, ExerciseGroup, ExerciseSet, GroupKind, Reps, Tempo, Weight, WeightUnit, Workout,
};
pub use notation::host::ParserHost;
pub use notation::parsing::parse;
pub use notation::validation::{validate, DirectoryExercise, ValidationReport};
