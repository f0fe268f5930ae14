//! Pre-parse validation of exercise names.
//!
//!     A lighter-weight pass than the full parser: it works on raw lines,
//!     not tokens, using a prioritized set of regex shapes to pull exercise
//!     name candidates out of each line, then cross-checks every candidate
//!     against both the built-in catalog and a caller-supplied exercise
//!     directory. Downstream confirmation flows run on the report before
//!     (or instead of) a full parse.
//!
//!     This layer is deliberately conservative: free-text notation is
//!     ambiguous, so auto-resolution below exact confidence is marked
//!     provisional via `needs_confirmation` rather than treated as final.

use crate::notation::catalog;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Directory matches at or above this word-overlap score count as matches;
/// weaker overlaps only rank as suggestions.
const DIRECTORY_MATCH_THRESHOLD: f64 = 0.8;
/// Overlap threshold for a directory entry to appear as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.5;
/// Confidence below this keeps a match provisional.
const CONFIRM_THRESHOLD: f64 = 0.9;
/// Cap on ranked suggestions per unmatched candidate.
const MAX_SUGGESTIONS: usize = 5;

/// A record from the external exercise directory. Only `name` participates
/// in matching; the rest rides along so callers get their own record back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryExercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_links: Vec<String>,
}

/// A candidate resolved against the catalog or the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedExercise {
    /// The candidate text as extracted from the line.
    pub input: String,
    /// The resolved name (canonical or directory form).
    pub name: String,
    /// The directory record, when the directory resolved it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<DirectoryExercise>,
    pub confidence: f64,
    pub needs_confirmation: bool,
}

/// A candidate neither source could resolve, with ranked alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedExercise {
    pub input: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub matched: Vec<MatchedExercise>,
    pub unmatched: Vec<UnmatchedExercise>,
    pub warnings: Vec<String>,
    pub requires_confirmation: bool,
}

/// Prioritized shapes for pulling a name candidate out of a line segment.
/// First capture wins; order matters.
static NAME_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    let patterns = [
        // weight-first: 225 3x5 Squat / 100kg 5x5 deadlift
        r"(?i)^\s*\d+(?:\.\d+)?\s*(?:lbs|lb|pounds|kg|kgs|kilos)?\s+\d+\s*[x×*]\s*(?:\d+(?:-\d+)?|amrap)\s+(?P<name>[a-z][a-z' -]*)",
        // standard / at-notation: 5x10 Squat, 3x8-12 Bench, 3x5 @80% Squat
        r"(?i)^\s*\d+\s*[x×*]\s*(?:\d+(?:-\d+)?|amrap)\s*(?:@\s*[\d.]+\s*%?\s*(?:lbs|lb|pounds|kg|kgs|kilos)?)?\s+(?P<name>[a-z][a-z' -]*)",
        // slash drop set: 12/10/8 Curls
        r"(?i)^\s*\d+(?:/\d+)+\s+(?P<name>[a-z][a-z' -]*)",
        // comma varying reps: 225x5,5,3 Bench
        r"(?i)^\s*\d+(?:\.\d+)?\s*(?:lbs|lb|pounds|kg|kgs|kilos)?\s*[x×*]\s*\d+(?:\s*,\s*\d+)+\s+(?P<name>[a-z][a-z' -]*)",
        // complex: 5x Incline DB (...)
        r"(?i)^\s*\d+\s*[x×*]\s+(?P<name>[a-z][a-z' -]*)",
        // bare name segment (superset continuations)
        r"(?i)^\s*(?:\d+\s+)?(?P<name>[a-z][a-z' -]*)\s*$",
    ];
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static validator regex"))
        .collect()
});

/// Trailing modifier keywords are not part of a name candidate.
static TRAILING_KEYWORDS: &[&str] = &[
    "rpe", "r", "rest", "tempo", "drop", "dropset", "amrap", "bw", "bodyweight", "rm",
];

/// Validate the exercise names in a notation document against the built-in
/// catalog and an external directory.
pub fn validate(
    text: &str,
    directory: &[DirectoryExercise],
    always_confirm: bool,
) -> ValidationReport {
    let mut report = ValidationReport {
        is_valid: true,
        ..Default::default()
    };

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // Superset separators get special treatment: each side is its own
        // candidate.
        let segments = split_superset_segments(line);
        for segment in segments {
            match extract_candidate(&segment) {
                Some(candidate) => check_candidate(&candidate, directory, always_confirm, &mut report),
                None => report.warnings.push(format!(
                    "line {}: could not extract an exercise name from {:?}",
                    index + 1,
                    segment.trim()
                )),
            }
        }
    }

    report.is_valid = report.unmatched.is_empty();
    report.requires_confirmation = always_confirm
        || !report.unmatched.is_empty()
        || report.matched.iter().any(|m| m.needs_confirmation);
    report
}

static SS_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+ss\s+").expect("static regex"));

fn split_superset_segments(line: &str) -> Vec<String> {
    SS_SPLIT.split(line).map(str::to_string).collect()
}

/// Run the prioritized shapes over a segment and clean up the capture.
fn extract_candidate(segment: &str) -> Option<String> {
    for shape in NAME_SHAPES.iter() {
        if let Some(caps) = shape.captures(segment) {
            if let Some(name) = caps.name("name") {
                let cleaned = trim_trailing_keywords(name.as_str());
                if !cleaned.is_empty() {
                    return Some(cleaned);
                }
            }
        }
    }
    None
}

fn trim_trailing_keywords(raw: &str) -> String {
    let mut words: Vec<&str> = raw.split_whitespace().collect();
    while let Some(last) = words.last() {
        if TRAILING_KEYWORDS.contains(&last.to_lowercase().as_str()) {
            words.pop();
        } else {
            break;
        }
    }
    words.join(" ")
}

fn check_candidate(
    candidate: &str,
    directory: &[DirectoryExercise],
    always_confirm: bool,
    report: &mut ValidationReport,
) {
    // Directory first: its match also carries the record back to the caller.
    let mut directory_ranked: Vec<(&DirectoryExercise, f64)> = directory
        .iter()
        .filter_map(|entry| {
            let score = word_overlap(candidate, &entry.name);
            (score >= SUGGESTION_THRESHOLD).then_some((entry, score))
        })
        .collect();
    directory_ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if let Some((entry, score)) = directory_ranked.first() {
        if *score >= DIRECTORY_MATCH_THRESHOLD {
            let confidence = if candidate.eq_ignore_ascii_case(&entry.name) {
                1.0
            } else {
                0.8
            };
            report.matched.push(MatchedExercise {
                input: candidate.to_string(),
                name: entry.name.clone(),
                exercise: Some((*entry).clone()),
                confidence,
                needs_confirmation: always_confirm || confidence < CONFIRM_THRESHOLD,
            });
            return;
        }
    }

    if let Some(canonical) = catalog::find_exercise(candidate) {
        let confidence = if candidate.eq_ignore_ascii_case(canonical) {
            1.0
        } else {
            0.8
        };
        report.matched.push(MatchedExercise {
            input: candidate.to_string(),
            name: canonical.to_string(),
            exercise: None,
            confidence,
            needs_confirmation: always_confirm || confidence < CONFIRM_THRESHOLD,
        });
        return;
    }

    // Unmatched: merge ranked suggestions, directory entries first on
    // duplicates.
    let mut suggestions: Vec<String> = Vec::new();
    for (entry, _) in &directory_ranked {
        push_unique(&mut suggestions, &entry.name);
    }
    for (name, _) in catalog::suggestions(candidate, MAX_SUGGESTIONS) {
        push_unique(&mut suggestions, name);
    }
    suggestions.truncate(MAX_SUGGESTIONS);
    report.unmatched.push(UnmatchedExercise {
        input: candidate.to_string(),
        suggestions,
    });
}

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        list.push(name.to_string());
    }
}

/// Word-overlap similarity: exact beats containment beats the fraction of
/// shared words.
fn word_overlap(a: &str, b: &str) -> f64 {
    let a_norm = a.trim().to_lowercase();
    let b_norm = b.trim().to_lowercase();
    if a_norm == b_norm {
        return 1.0;
    }
    if a_norm.contains(&b_norm) || b_norm.contains(&a_norm) {
        return 0.8;
    }
    let a_words: Vec<&str> = a_norm.split_whitespace().collect();
    let b_words: Vec<&str> = b_norm.split_whitespace().collect();
    if a_words.is_empty() || b_words.is_empty() {
        return 0.0;
    }
    let shared = a_words.iter().filter(|w| b_words.contains(w)).count();
    shared as f64 / a_words.len().max(b_words.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<DirectoryExercise> {
        vec![
            DirectoryExercise {
                id: "ex-1".into(),
                name: "Cable Crossover".into(),
                muscle_group: Some("chest".into()),
                equipment: Some("cable".into()),
                video_links: Vec::new(),
            },
            DirectoryExercise {
                id: "ex-2".into(),
                name: "Leg Press".into(),
                muscle_group: Some("legs".into()),
                equipment: Some("machine".into()),
                video_links: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_exact_directory_match() {
        let report = validate("3x10 Leg Press", &directory(), false);
        assert!(report.is_valid);
        assert_eq!(report.matched.len(), 1);
        let matched = &report.matched[0];
        assert_eq!(matched.confidence, 1.0);
        assert!(!matched.needs_confirmation);
        assert_eq!(matched.exercise.as_ref().unwrap().id, "ex-2");
    }

    #[test]
    fn test_catalog_match_when_directory_misses() {
        let report = validate("5x5 deadlift", &directory(), false);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].name, "deadlift");
        assert!(report.matched[0].exercise.is_none());
    }

    #[test]
    fn test_fuzzy_match_needs_confirmation() {
        // Resolves through the catalog alias, so confidence drops to 0.8.
        let report = validate("5x5 benchpress", &directory(), false);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].confidence, 0.8);
        assert!(report.matched[0].needs_confirmation);
    }

    #[test]
    fn test_always_confirm_forces_confirmation() {
        let report = validate("3x10 Leg Press", &directory(), true);
        assert!(report.matched[0].needs_confirmation);
        assert!(report.requires_confirmation);
    }

    #[test]
    fn test_superset_segments_validated_independently() {
        let report = validate("4x10 Leg Press ss 4x15 leg curls", &directory(), false);
        assert_eq!(report.matched.len(), 2);
    }

    #[test]
    fn test_unmatched_gets_merged_suggestions() {
        // "cable thing" overlaps "Cable Crossover" at 0.5: a suggestion,
        // not a match, and nothing in the catalog accepts it either.
        let report = validate("3x10 cable thing", &directory(), false);
        assert!(!report.is_valid);
        assert_eq!(report.unmatched.len(), 1);
        let unmatched = &report.unmatched[0];
        assert!(unmatched.suggestions.len() <= 5);
        // Directory suggestions rank before catalog ones.
        assert!(unmatched
            .suggestions
            .first()
            .is_some_and(|s| s.eq_ignore_ascii_case("cable crossover")));
        assert!(report.requires_confirmation);
    }

    #[test]
    fn test_containment_counts_as_directory_match() {
        let report = validate("3x10 seated leg press", &directory(), false);
        assert_eq!(report.matched.len(), 1);
        let matched = &report.matched[0];
        assert_eq!(matched.name, "Leg Press");
        assert_eq!(matched.confidence, 0.8);
        assert!(matched.needs_confirmation);
    }

    #[test]
    fn test_word_overlap_ladder() {
        assert_eq!(word_overlap("Leg Press", "leg press"), 1.0);
        assert_eq!(word_overlap("seated leg press", "Leg Press"), 0.8);
        assert_eq!(word_overlap("leg day press", "leg press"), 2.0 / 3.0);
        assert_eq!(word_overlap("pull up", "bench press"), 0.0);
    }

    #[test]
    fn test_unextractable_line_becomes_warning() {
        let report = validate("12345 67890", &directory(), false);
        assert!(!report.warnings.is_empty());
    }
}
