use serde::Serialize;

use super::domain::AssignmentConfig;
use super::range::LetterSpan;

/// One well-formedness problem found in a configuration, tagged with the
/// offending table key so an editing surface can render it inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViolation {
    pub key: String,
    pub problem: ViolationKind,
}

impl ConfigViolation {
    pub fn message(&self) -> String {
        format!("'{}': {}", self.key, self.problem)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ViolationKind {
    #[error("not a letter or letter-letter range")]
    MalformedRangeSpec,
    #[error("overlaps range '{other}'")]
    OverlappingRanges { other: String },
    #[error("grade label is empty")]
    EmptyGradeLabel,
}

/// Check every entry of both mapping tables, whichever policy type is
/// active, and collect violations without mutating the input. An empty
/// table is a valid "no mapping yet" state, not an error.
pub fn validate(config: &AssignmentConfig) -> Vec<ConfigViolation> {
    let mut violations = Vec::new();

    for label in config.grade_mappings.keys() {
        if label.trim().is_empty() {
            violations.push(ConfigViolation {
                key: label.clone(),
                problem: ViolationKind::EmptyGradeLabel,
            });
        }
    }

    let mut parsed: Vec<(usize, LetterSpan)> = Vec::new();
    for (index, entry) in config.letter_ranges.iter().enumerate() {
        match LetterSpan::parse(&entry.range) {
            Some(span) => parsed.push((index, span)),
            None => violations.push(ConfigViolation {
                key: entry.range.clone(),
                problem: ViolationKind::MalformedRangeSpec,
            }),
        }
    }

    // Overlaps are reported once per pair, attached to the later entry.
    for (position, &(index, span)) in parsed.iter().enumerate() {
        for &(earlier_index, earlier_span) in &parsed[..position] {
            if span.overlaps(earlier_span) {
                violations.push(ConfigViolation {
                    key: config.letter_ranges[index].range.clone(),
                    problem: ViolationKind::OverlappingRanges {
                        other: config.letter_ranges[earlier_index].range.clone(),
                    },
                });
            }
        }
    }

    violations
}
