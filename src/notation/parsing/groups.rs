//! Group assembly: canonicalization and superset inheritance.
//!
//! Strategies produce raw `ParsedExercise`s; this step turns a run of them
//! into one `ExerciseGroup`. Two cross-cutting rules live here:
//!
//! - Names are canonicalized through the catalog. An unmatched name is kept
//!   as written (custom exercises are accepted by policy) and, when a near
//!   miss exists, a `ParseSuggestion` is emitted instead of an error.
//!
//! - Superset/circuit members that omit a set count inherit the first
//!   exercise's set count; members that also omit reps inherit its rep
//!   scheme verbatim. A member with its own reps but no count inherits the
//!   count only. Lead exercises always state their own sets.

use crate::notation::ast::diagnostics::ParseSuggestion;
use crate::notation::ast::{Exercise, ExerciseGroup, ExerciseSet, GroupKind, Reps};
use crate::notation::catalog;
use crate::notation::parsing::strategies::ParsedExercise;

/// How many alternatives ride along on a name suggestion.
const MAX_NAME_ALTERNATIVES: usize = 4;

/// Assemble parsed members into a group, resolving inheritance against the
/// first member and collecting name suggestions.
pub fn assemble(
    members: Vec<ParsedExercise>,
    kind: GroupKind,
    suggestions: &mut Vec<ParseSuggestion>,
) -> Option<ExerciseGroup> {
    let first_sets: Vec<ExerciseSet> = members.first()?.sets.clone();
    if first_sets.is_empty() {
        return None;
    }
    let inherited_count = first_sets.len();
    let inherited_reps = first_sets[0].reps;

    let mut exercises = Vec::with_capacity(members.len());
    for member in members {
        let sets = if member.sets.is_empty() {
            let reps = member.pending_reps.unwrap_or(inherited_reps);
            inherit_sets(inherited_count, reps, &member)
        } else {
            member.sets.clone()
        };
        debug_assert!(!sets.is_empty());

        let name = resolve_name(&member.raw_name, suggestions);
        exercises.push(Exercise {
            name,
            sets,
            notes: member.notes.clone(),
            dropset: member.dropset,
        });
    }

    let kind = if exercises.len() == 1 {
        GroupKind::Single
    } else {
        kind
    };
    Some(ExerciseGroup {
        kind,
        exercises,
        rest_secs: None,
    })
}

fn inherit_sets(count: usize, reps: Reps, member: &ParsedExercise) -> Vec<ExerciseSet> {
    (0..count)
        .map(|_| {
            let mut set = ExerciseSet::new(reps);
            member.modifiers.apply(&mut set);
            set
        })
        .collect()
}

/// Canonicalize a raw name, emitting a "did you mean" suggestion when the
/// catalog has a near miss but no acceptable match.
fn resolve_name(raw: &str, suggestions: &mut Vec<ParseSuggestion>) -> String {
    if let Some(canonical) = catalog::find_exercise(raw) {
        return canonical.to_string();
    }
    let ranked = catalog::suggestions(raw, MAX_NAME_ALTERNATIVES + 1);
    if let Some((best, confidence)) = ranked.first() {
        suggestions.push(ParseSuggestion {
            original: raw.to_string(),
            suggestion: (*best).to_string(),
            confidence: *confidence,
            alternatives: ranked[1..].iter().map(|(n, _)| (*n).to_string()).collect(),
        });
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::lexing::tokenize;
    use crate::notation::parsing::cursor::Cursor;
    use crate::notation::parsing::strategies::try_exercise;

    fn parsed(source: &str, continuation: bool) -> ParsedExercise {
        let tokens = tokenize(source);
        let mut cur = Cursor::new(&tokens);
        try_exercise(&mut cur, continuation).expect("strategy should match")
    }

    #[test]
    fn test_single_group() {
        let mut sugg = Vec::new();
        let group = assemble(vec![parsed("5x10 Squat", false)], GroupKind::Single, &mut sugg)
            .unwrap();
        assert_eq!(group.kind, GroupKind::Single);
        assert_eq!(group.exercises.len(), 1);
        assert_eq!(group.exercises[0].name, "squat");
    }

    #[test]
    fn test_full_inheritance() {
        let mut sugg = Vec::new();
        let group = assemble(
            vec![parsed("5x5 benchpress", false), parsed("banded pull aparts", true)],
            GroupKind::Superset,
            &mut sugg,
        )
        .unwrap();
        assert_eq!(group.kind, GroupKind::Superset);
        let second = &group.exercises[1];
        assert_eq!(second.name, "band pull apart");
        assert_eq!(second.sets.len(), 5);
        assert!(second.sets.iter().all(|s| s.reps == Reps::fixed(5)));
    }

    #[test]
    fn test_count_only_inheritance() {
        let mut sugg = Vec::new();
        let group = assemble(
            vec![parsed("4x8 barbell row", false), parsed("15 face pulls", true)],
            GroupKind::Superset,
            &mut sugg,
        )
        .unwrap();
        let second = &group.exercises[1];
        assert_eq!(second.sets.len(), 4);
        assert!(second.sets.iter().all(|s| s.reps == Reps::fixed(15)));
    }

    #[test]
    fn test_range_scheme_inherited_verbatim() {
        let mut sugg = Vec::new();
        let group = assemble(
            vec![parsed("3x8-12 lat pulldown", false), parsed("chest fly", true)],
            GroupKind::Superset,
            &mut sugg,
        )
        .unwrap();
        let second = &group.exercises[1];
        assert!(second.sets.iter().all(|s| s.reps == Reps::range(8, 12)));
    }

    #[test]
    fn test_unknown_name_kept_with_suggestion() {
        // "plonkk" sits below the acceptance threshold but close enough to
        // "plank" to rank as a suggestion.
        let mut sugg = Vec::new();
        let group = assemble(
            vec![parsed("3x10 plonkk", false)],
            GroupKind::Single,
            &mut sugg,
        )
        .unwrap();
        // Name survives as written; the near miss becomes a suggestion.
        assert_eq!(group.exercises[0].name, "plonkk");
        assert!(!sugg.is_empty());
        assert_eq!(sugg[0].original, "plonkk");
    }

    #[test]
    fn test_lead_without_sets_is_rejected() {
        let mut sugg = Vec::new();
        assert!(assemble(
            vec![parsed("banded pull aparts", true)],
            GroupKind::Single,
            &mut sugg
        )
        .is_none());
    }
}
