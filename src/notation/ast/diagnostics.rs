//! Parse diagnostics: errors, suggestions, and the result envelope.
//!
//! Nothing is thrown across the public API boundary. Every failure mode of
//! `parse` is representable in `ParseResult`: blocking problems are
//! `Error`-severity entries, accepted-but-suspect exercise names travel as
//! `ParseSuggestion`s so the caller can render "did you mean" prompts.

use crate::notation::ast::Workout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity. `Error` entries make the whole result unsuccessful;
/// `Warning` entries do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A positioned parse diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseError {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub severity: Severity,
}

impl ParseError {
    pub fn error(offset: usize, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            line,
            column,
            message: message.into(),
            suggestion: None,
            severity: Severity::Error,
        }
    }

    pub fn warning(offset: usize, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(offset, line, column, message)
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.severity, self.line, self.column, self.message
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// A "did you mean" candidate for an unrecognized exercise name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseSuggestion {
    pub original: String,
    pub suggestion: String,
    /// 0..=1 match confidence.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
}

/// The envelope returned by `parse`.
///
/// `success` is true iff `errors` contains no `Error`-severity entries; a
/// workout may still be present alongside warnings or advisory errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout: Option<Workout>,
    pub errors: Vec<ParseError>,
    pub suggestions: Vec<ParseSuggestion>,
}

impl ParseResult {
    /// Assemble a result, deriving `success` from the collected errors.
    pub fn new(
        workout: Option<Workout>,
        errors: Vec<ParseError>,
        suggestions: Vec<ParseSuggestion>,
    ) -> Self {
        let success = !errors.iter().any(|e| e.severity == Severity::Error);
        Self {
            success,
            workout,
            errors,
            suggestions,
        }
    }

    /// A result carrying exactly one blocking error and no workout.
    pub fn rejected(error: ParseError) -> Self {
        Self::new(None, vec![error], Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_derived_from_severity() {
        let warn = ParseError::warning(0, 1, 1, "suspicious");
        let result = ParseResult::new(Some(Workout::default()), vec![warn], vec![]);
        assert!(result.success);

        let err = ParseError::error(0, 1, 1, "bad");
        let result = ParseResult::new(Some(Workout::default()), vec![err], vec![]);
        assert!(!result.success);
    }

    #[test]
    fn test_rejected_has_no_workout() {
        let result = ParseResult::rejected(ParseError::error(0, 1, 1, "too long"));
        assert!(!result.success);
        assert!(result.workout.is_none());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_suggestion_builder() {
        let err = ParseError::error(3, 1, 4, "no notation matched")
            .with_suggestion("try the SETSxREPS form, e.g. \"3x10 Squat\"");
        assert!(err.suggestion.unwrap().contains("SETSxREPS"));
    }
}
