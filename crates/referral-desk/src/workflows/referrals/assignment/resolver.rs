use super::domain::{
    Assignment, AssignmentConfig, AssignmentPolicyType, LetterRangeMapping, NameField,
    StudentAssignmentInput,
};
use super::range::LetterSpan;

/// Deterministically map a student to the responsible administrator, or to
/// `Unassigned` when no mapping applies.
///
/// Pure over `(config, input)`: no I/O, no clock, no randomness. The
/// function never fails; missing or unusable input data resolves to
/// `Unassigned`, and a malformed range entry simply never matches (a saved
/// config is expected to have passed validation first).
pub fn resolve(config: &AssignmentConfig, input: &StudentAssignmentInput) -> Assignment {
    match config.policy_type {
        AssignmentPolicyType::None => Assignment::Unassigned,
        AssignmentPolicyType::GradeBased => resolve_by_grade(config, input),
        AssignmentPolicyType::AlphabeticalBased => resolve_by_letter(config, input),
    }
}

fn resolve_by_grade(config: &AssignmentConfig, input: &StudentAssignmentInput) -> Assignment {
    // Exact, case-sensitive lookup; stored labels are matched as saved.
    match input.grade_level.as_deref() {
        Some(grade) if !grade.is_empty() => match config.grade_mappings.get(grade) {
            Some(administrator) => Assignment::Assigned(administrator.clone()),
            None => Assignment::Unassigned,
        },
        _ => Assignment::Unassigned,
    }
}

fn resolve_by_letter(config: &AssignmentConfig, input: &StudentAssignmentInput) -> Assignment {
    let source = match config.name_field {
        NameField::FirstName => input.first_name.as_deref(),
        NameField::LastName => input.last_name.as_deref(),
    };

    let initial = match source.and_then(|name| name.chars().next()) {
        Some(first) if first.is_ascii_alphabetic() => first.to_ascii_uppercase() as u8,
        _ => return Assignment::Unassigned,
    };

    // When overlapping ranges were saved anyway (e.g. imported past
    // validation), the winner is the match with the smallest normalized
    // start letter, then the smallest end letter; a remaining tie falls to
    // the earliest entry. Stable so resolution is reproducible.
    let mut winner: Option<(LetterSpan, &LetterRangeMapping)> = None;
    for entry in &config.letter_ranges {
        let span = match LetterSpan::parse(&entry.range) {
            Some(span) => span,
            None => continue,
        };
        if !span.contains(initial) {
            continue;
        }
        match winner {
            Some((best, _)) if best <= span => {}
            _ => winner = Some((span, entry)),
        }
    }

    match winner {
        Some((_, entry)) => Assignment::Assigned(entry.administrator.clone()),
        None => Assignment::Unassigned,
    }
}
