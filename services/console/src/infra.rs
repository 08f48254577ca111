use std::collections::HashMap;
use std::fs;
use std::path::Path;

use referral_desk::error::AppError;
use referral_desk::workflows::referrals::assignment::{
    AdministratorId, AdministratorRef, AdministratorRoster, AssignmentConfig,
    AssignmentPolicyType, ConfigEditingSession, DirectoryError, OrganizationId, RosterError,
    StudentAssignmentInput, StudentDirectory, StudentId,
};

#[derive(Default, Clone)]
pub(crate) struct InMemoryRoster {
    entries: Vec<AdministratorRef>,
}

impl InMemoryRoster {
    pub(crate) fn new(entries: Vec<AdministratorRef>) -> Self {
        Self { entries }
    }
}

impl AdministratorRoster for InMemoryRoster {
    fn administrators(
        &self,
        _organization: &OrganizationId,
    ) -> Result<Vec<AdministratorRef>, RosterError> {
        Ok(self.entries.clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryStudentDirectory {
    records: HashMap<StudentId, StudentAssignmentInput>,
}

impl InMemoryStudentDirectory {
    pub(crate) fn new(records: HashMap<StudentId, StudentAssignmentInput>) -> Self {
        Self { records }
    }
}

impl StudentDirectory for InMemoryStudentDirectory {
    fn assignment_input(
        &self,
        student: &StudentId,
    ) -> Result<Option<StudentAssignmentInput>, DirectoryError> {
        Ok(self.records.get(student).cloned())
    }
}

pub(crate) fn demo_organization() -> OrganizationId {
    OrganizationId("org-lincoln-high".to_string())
}

pub(crate) fn demo_roster() -> InMemoryRoster {
    InMemoryRoster::new(vec![
        AdministratorRef {
            id: AdministratorId("counselor-ortiz".to_string()),
            display_name: "Reyna Ortiz".to_string(),
        },
        AdministratorRef {
            id: AdministratorId("counselor-bell".to_string()),
            display_name: "Andre Bell".to_string(),
        },
        AdministratorRef {
            id: AdministratorId("dean-hargrove".to_string()),
            display_name: "Simone Hargrove".to_string(),
        },
    ])
}

pub(crate) fn demo_directory() -> InMemoryStudentDirectory {
    let mut records = HashMap::new();
    records.insert(
        StudentId("stu-nguyen".to_string()),
        StudentAssignmentInput {
            grade_level: Some("10".to_string()),
            first_name: Some("Thanh".to_string()),
            last_name: Some("Nguyen".to_string()),
        },
    );
    records.insert(
        StudentId("stu-abbott".to_string()),
        StudentAssignmentInput {
            grade_level: Some("9".to_string()),
            first_name: Some("Gwen".to_string()),
            last_name: Some("Abbott".to_string()),
        },
    );
    records.insert(
        StudentId("stu-ibarra".to_string()),
        StudentAssignmentInput {
            grade_level: Some("12".to_string()),
            first_name: Some("Marco".to_string()),
            last_name: Some("Ibarra".to_string()),
        },
    );
    records.insert(
        StudentId("stu-transfer".to_string()),
        StudentAssignmentInput {
            grade_level: None,
            first_name: None,
            last_name: None,
        },
    );
    InMemoryStudentDirectory::new(records)
}

/// The configuration the demo walkthrough builds: an alphabetical split of
/// last names, with grade mappings retained from a prior mode.
pub(crate) fn demo_assignment_config() -> AssignmentConfig {
    let mut session = ConfigEditingSession::new(AssignmentConfig::default());
    session.switch_to(AssignmentPolicyType::GradeBased);
    session.apply_grade_mapping(
        "9, 10",
        AdministratorId("counselor-ortiz".to_string()),
    );
    session.apply_grade_mapping(
        "11, 12",
        AdministratorId("counselor-bell".to_string()),
    );
    session.switch_to(AssignmentPolicyType::AlphabeticalBased);
    session.apply_letter_range_mapping("A-L", AdministratorId("counselor-ortiz".to_string()));
    session.apply_letter_range_mapping("M-Z", AdministratorId("counselor-bell".to_string()));
    session.finish()
}

pub(crate) fn load_config_file(path: &Path) -> Result<AssignmentConfig, AppError> {
    let raw = fs::read_to_string(path)?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}
