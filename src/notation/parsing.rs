//! Notation parser
//!
//!     A `Workout` is a sequence of exercise groups separated by newlines. A
//!     group starts with one exercise and may continue with `ss` (superset)
//!     or `+` followed by something that looks like another exercise
//!     (circuit). Exercises themselves are parsed by the prioritized
//!     strategy list in [strategies]; group assembly and superset
//!     inheritance live in [groups]; the entry point, guardrails, and
//!     per-line error recovery live in [engine].
//!
//! Failure model
//!
//!     `parse` never fails as a function: every failure mode is a
//!     diagnostic inside the returned `ParseResult`. One malformed line
//!     produces one structural error (with a heuristic suggestion) and the
//!     parser skips to the next recovery point, so a multi-line document
//!     still yields its parsable groups.

pub mod cursor;
pub mod engine;
pub mod groups;
pub mod modifiers;
pub mod strategies;

pub use engine::{parse, MAX_INPUT_CHARS, MAX_TOKENS, PARSE_TIME_BUDGET};
