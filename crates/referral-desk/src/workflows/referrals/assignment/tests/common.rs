use std::collections::HashMap;
use std::sync::Arc;

use crate::workflows::referrals::assignment::directory::{
    AdministratorRoster, DirectoryError, RosterError, StudentDirectory,
};
use crate::workflows::referrals::assignment::domain::{
    AdministratorId, AdministratorRef, AssignmentConfig, AssignmentPolicyType, NameField,
    OrganizationId, StudentAssignmentInput, StudentId,
};
use crate::workflows::referrals::assignment::session::{
    apply_grade_mapping, apply_letter_range_mapping, set_name_field, switch_policy,
};
use crate::workflows::referrals::assignment::ReferralAssignmentService;

pub(super) fn admin(id: &str) -> AdministratorId {
    AdministratorId(id.to_string())
}

pub(super) fn organization() -> OrganizationId {
    OrganizationId("org-lincoln-high".to_string())
}

pub(super) fn grade_input(grade: &str) -> StudentAssignmentInput {
    StudentAssignmentInput {
        grade_level: Some(grade.to_string()),
        ..StudentAssignmentInput::default()
    }
}

pub(super) fn name_input(first: &str, last: &str) -> StudentAssignmentInput {
    StudentAssignmentInput {
        grade_level: None,
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
    }
}

/// Grade policy mapping 9/10 to admin-a and 11/12 to admin-b.
pub(super) fn grade_config() -> AssignmentConfig {
    let config = switch_policy(AssignmentConfig::default(), AssignmentPolicyType::GradeBased);
    let config = apply_grade_mapping(config, "9, 10", admin("admin-a"));
    apply_grade_mapping(config, "11, 12", admin("admin-b"))
}

/// Alphabetical policy splitting the last-name alphabet at M/N.
pub(super) fn alpha_config() -> AssignmentConfig {
    let config = switch_policy(
        AssignmentConfig::default(),
        AssignmentPolicyType::AlphabeticalBased,
    );
    let config = set_name_field(config, NameField::LastName);
    let config = apply_letter_range_mapping(config, "A-M", admin("admin-a"));
    apply_letter_range_mapping(config, "N-Z", admin("admin-b"))
}

pub(super) fn roster_entries() -> Vec<AdministratorRef> {
    vec![
        AdministratorRef {
            id: admin("admin-a"),
            display_name: "Dana Whitfield".to_string(),
        },
        AdministratorRef {
            id: admin("admin-b"),
            display_name: "Marcus Okafor".to_string(),
        },
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryRoster {
    pub(super) entries: Vec<AdministratorRef>,
}

impl AdministratorRoster for MemoryRoster {
    fn administrators(
        &self,
        _organization: &OrganizationId,
    ) -> Result<Vec<AdministratorRef>, RosterError> {
        Ok(self.entries.clone())
    }
}

pub(super) struct UnavailableRoster;

impl AdministratorRoster for UnavailableRoster {
    fn administrators(
        &self,
        _organization: &OrganizationId,
    ) -> Result<Vec<AdministratorRef>, RosterError> {
        Err(RosterError::Unavailable("roster service offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryDirectory {
    pub(super) records: HashMap<StudentId, StudentAssignmentInput>,
}

impl MemoryDirectory {
    pub(super) fn with(records: &[(&str, StudentAssignmentInput)]) -> Self {
        Self {
            records: records
                .iter()
                .map(|(id, input)| (StudentId(id.to_string()), input.clone()))
                .collect(),
        }
    }
}

impl StudentDirectory for MemoryDirectory {
    fn assignment_input(
        &self,
        student: &StudentId,
    ) -> Result<Option<StudentAssignmentInput>, DirectoryError> {
        Ok(self.records.get(student).cloned())
    }
}

pub(super) struct UnavailableDirectory;

impl StudentDirectory for UnavailableDirectory {
    fn assignment_input(
        &self,
        _student: &StudentId,
    ) -> Result<Option<StudentAssignmentInput>, DirectoryError> {
        Err(DirectoryError::Unavailable(
            "student information system offline".to_string(),
        ))
    }
}

pub(super) fn build_service(
    directory: MemoryDirectory,
    config: AssignmentConfig,
) -> ReferralAssignmentService<MemoryRoster, MemoryDirectory> {
    ReferralAssignmentService::new(
        Arc::new(MemoryRoster {
            entries: roster_entries(),
        }),
        Arc::new(directory),
        organization(),
        config,
    )
}
