use super::domain::{
    AdministratorId, AssignmentConfig, AssignmentPolicyType, LetterRangeMapping, NameField,
};

/// Change the active policy type.
///
/// Switching to `GradeBased` or `AlphabeticalBased` changes nothing except
/// `policy_type`: the now-inactive mapping table and the `name_field`
/// selection stay on the config so the user can toggle back without
/// re-entering anything. Switching to `None` is the explicit "manual
/// assignment" reset and clears the whole config; a caller that wants an
/// undo path must snapshot the config before calling this.
pub fn switch_policy(
    mut config: AssignmentConfig,
    target: AssignmentPolicyType,
) -> AssignmentConfig {
    match target {
        AssignmentPolicyType::None => AssignmentConfig::default(),
        AssignmentPolicyType::GradeBased | AssignmentPolicyType::AlphabeticalBased => {
            config.policy_type = target;
            config
        }
    }
}

/// Upsert one or more grade labels ("9, 10") to an administrator. Last
/// write wins per label; unrelated labels are untouched. A blank label
/// list or a blank administrator id leaves the config unchanged.
pub fn apply_grade_mapping(
    mut config: AssignmentConfig,
    labels: &str,
    administrator: AdministratorId,
) -> AssignmentConfig {
    if administrator.0.trim().is_empty() {
        return config;
    }
    for label in split_entries(labels) {
        config.grade_mappings.insert(label, administrator.clone());
    }
    config
}

/// Delete one grade label; a missing label is a no-op.
pub fn remove_grade_mapping(mut config: AssignmentConfig, label: &str) -> AssignmentConfig {
    config.grade_mappings.remove(label);
    config
}

/// Upsert one or more range specs ("A-M, N-Z") to an administrator, keyed
/// by the spec exactly as typed. Re-mapping an existing spec replaces its
/// administrator in place; new specs append. No overlap checking happens
/// here: the user always sees what they entered, and validation flags it
/// at save time.
pub fn apply_letter_range_mapping(
    mut config: AssignmentConfig,
    ranges: &str,
    administrator: AdministratorId,
) -> AssignmentConfig {
    if administrator.0.trim().is_empty() {
        return config;
    }
    for range in split_entries(ranges) {
        match config
            .letter_ranges
            .iter_mut()
            .find(|entry| entry.range == range)
        {
            Some(entry) => entry.administrator = administrator.clone(),
            None => config.letter_ranges.push(LetterRangeMapping {
                range,
                administrator: administrator.clone(),
            }),
        }
    }
    config
}

/// Delete one range spec; a missing spec is a no-op.
pub fn remove_letter_range_mapping(mut config: AssignmentConfig, range: &str) -> AssignmentConfig {
    config.letter_ranges.retain(|entry| entry.range != range);
    config
}

/// Select which name field alphabetical matching reads.
pub fn set_name_field(mut config: AssignmentConfig, field: NameField) -> AssignmentConfig {
    config.name_field = field;
    config
}

fn split_entries(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Long-lived interactive editing state for one organization's config.
///
/// A thin wrapper over the pure transformations above: every mutation
/// replaces the working copy wholesale, so there is no terminal state and
/// no partial edit to roll back. Saving the result is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEditingSession {
    current: AssignmentConfig,
}

impl ConfigEditingSession {
    /// Start from whatever the stored config currently holds.
    pub fn new(initial: AssignmentConfig) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &AssignmentConfig {
        &self.current
    }

    pub fn switch_to(&mut self, target: AssignmentPolicyType) {
        self.current = switch_policy(self.take(), target);
    }

    pub fn apply_grade_mapping(&mut self, labels: &str, administrator: AdministratorId) {
        self.current = apply_grade_mapping(self.take(), labels, administrator);
    }

    pub fn remove_grade_mapping(&mut self, label: &str) {
        self.current = remove_grade_mapping(self.take(), label);
    }

    pub fn apply_letter_range_mapping(&mut self, ranges: &str, administrator: AdministratorId) {
        self.current = apply_letter_range_mapping(self.take(), ranges, administrator);
    }

    pub fn remove_letter_range_mapping(&mut self, range: &str) {
        self.current = remove_letter_range_mapping(self.take(), range);
    }

    pub fn set_name_field(&mut self, field: NameField) {
        self.current = set_name_field(self.take(), field);
    }

    pub fn finish(self) -> AssignmentConfig {
        self.current
    }

    fn take(&mut self) -> AssignmentConfig {
        std::mem::take(&mut self.current)
    }
}
