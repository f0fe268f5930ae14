//! Workout AST element types.
//!
//! Everything here is an immutable value object created fresh per parse and
//! returned to the caller; the parser keeps no state across calls. All types
//! serialize to JSON for the CLI and downstream consumers.

pub mod diagnostics;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight units the notation recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "lbs")]
    Lbs,
    #[serde(rename = "kg")]
    Kg,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Lbs => write!(f, "lbs"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

/// A load prescription.
///
/// `max` encodes a range (25-35 lbs). `percentage` means `value` is a %1RM
/// rather than an absolute load. `per_side` means the value is loaded
/// symmetrically on each side of the implement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<WeightUnit>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bodyweight: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub percentage: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub per_side: bool,
}

impl Weight {
    pub fn absolute(value: f64, unit: Option<WeightUnit>) -> Self {
        Self {
            value,
            max: None,
            unit,
            bodyweight: false,
            percentage: false,
            per_side: false,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self {
            value,
            max: None,
            unit: None,
            bodyweight: false,
            percentage: true,
            per_side: false,
        }
    }

    pub fn bodyweight() -> Self {
        Self {
            value: 0.0,
            max: None,
            unit: None,
            bodyweight: true,
            percentage: false,
            per_side: false,
        }
    }
}

/// Per-rep timing in seconds: eccentric, pause, concentric, optional pause
/// at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tempo {
    pub eccentric: u32,
    pub pause: u32,
    pub concentric: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_top: Option<u32>,
}

/// A rep target: fixed count, range, or the AMRAP sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Reps {
    Fixed { count: u32 },
    Range { min: u32, max: u32 },
    Amrap,
}

impl Reps {
    pub fn fixed(count: u32) -> Self {
        Reps::Fixed { count }
    }

    pub fn range(min: u32, max: u32) -> Self {
        Reps::Range { min, max }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Fixed { count } => write!(f, "{}", count),
            Reps::Range { min, max } => write!(f, "{}-{}", min, max),
            Reps::Amrap => write!(f, "AMRAP"),
        }
    }
}

/// One prescribed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    pub reps: Reps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<Tempo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_secs: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
}

impl ExerciseSet {
    pub fn new(reps: Reps) -> Self {
        Self {
            reps,
            weight: None,
            rpe: None,
            tempo: None,
            rest_secs: None,
            failed: false,
        }
    }
}

/// One exercise with its sets. `name` is the canonical name when the catalog
/// resolved it, otherwise the raw text as written. Invariant: an exercise
/// accepted into a `Workout` has at least one set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: Vec<ExerciseSet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dropset: bool,
}

/// How a group's exercises relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Single,
    Superset,
    Circuit,
    Dropset,
    Cluster,
}

/// An ordered group of exercises performed together.
///
/// Invariant: `Single` holds exactly one exercise; `Superset` and `Circuit`
/// hold at least two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseGroup {
    pub kind: GroupKind,
    pub exercises: Vec<Exercise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_secs: Option<u32>,
}

impl ExerciseGroup {
    pub fn single(exercise: Exercise) -> Self {
        Self {
            kind: GroupKind::Single,
            exercises: vec![exercise],
            rest_secs: None,
        }
    }
}

/// A parsed workout: groups in source line order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workout {
    pub groups: Vec<ExerciseGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reps_display() {
        assert_eq!(Reps::fixed(10).to_string(), "10");
        assert_eq!(Reps::range(8, 12).to_string(), "8-12");
        assert_eq!(Reps::Amrap.to_string(), "AMRAP");
    }

    #[test]
    fn test_weight_constructors() {
        let w = Weight::percent(80.0);
        assert!(w.percentage);
        assert!(!w.bodyweight);

        let bw = Weight::bodyweight();
        assert!(bw.bodyweight);
        assert_eq!(bw.value, 0.0);
    }

    #[test]
    fn test_serialization_shape() {
        let set = ExerciseSet::new(Reps::range(8, 12));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["reps"]["type"], "range");
        assert_eq!(json["reps"]["min"], 8);
        // Unset options are omitted, not null.
        assert!(json.get("weight").is_none());
    }
}
