use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for administrators eligible to receive referrals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdministratorId(pub String);

impl fmt::Display for AdministratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for students in the external directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for the organization owning a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub String);

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which assignment strategy is currently authoritative for an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPolicyType {
    /// Manual assignment only; the resolver never assigns anyone.
    None,
    GradeBased,
    AlphabeticalBased,
}

impl AssignmentPolicyType {
    pub const fn label(self) -> &'static str {
        match self {
            AssignmentPolicyType::None => "manual",
            AssignmentPolicyType::GradeBased => "grade_based",
            AssignmentPolicyType::AlphabeticalBased => "alphabetical_based",
        }
    }
}

impl Default for AssignmentPolicyType {
    fn default() -> Self {
        AssignmentPolicyType::None
    }
}

/// Which of the student's name fields alphabetical matching reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    FirstName,
    LastName,
}

impl Default for NameField {
    fn default() -> Self {
        NameField::LastName
    }
}

/// One letter-range entry. `range` is kept exactly as the user typed it;
/// only resolution and validation interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRangeMapping {
    pub range: String,
    pub administrator: AdministratorId,
}

/// The persisted and edited assignment policy for one organization.
///
/// Both mapping tables are always carried, whichever policy type is active:
/// the inactive table is inert for resolution but survives policy switches
/// so an administrator can toggle modes without re-entering mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    #[serde(default)]
    pub policy_type: AssignmentPolicyType,
    #[serde(default)]
    pub grade_mappings: BTreeMap<String, AdministratorId>,
    #[serde(default)]
    pub letter_ranges: Vec<LetterRangeMapping>,
    #[serde(default)]
    pub name_field: NameField,
}

impl AssignmentConfig {
    pub fn letter_range(&self, range: &str) -> Option<&AdministratorId> {
        self.letter_ranges
            .iter()
            .find(|entry| entry.range == range)
            .map(|entry| &entry.administrator)
    }
}

/// Roster entry supplied by the external member-roster collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministratorRef {
    pub id: AdministratorId,
    pub display_name: String,
}

/// The minimal projection of a student record the resolver needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAssignmentInput {
    #[serde(default)]
    pub grade_level: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Resolution result. `Unassigned` is an explicit "no administrator
/// responsible" value, distinct from an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    Assigned(AdministratorId),
    Unassigned,
}

impl Assignment {
    pub fn assigned_to(&self) -> Option<&AdministratorId> {
        match self {
            Assignment::Assigned(id) => Some(id),
            Assignment::Unassigned => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Assignment::Assigned(id) => format!("assigned to {id}"),
            Assignment::Unassigned => "unassigned".to_string(),
        }
    }
}
