use super::domain::{AdministratorRef, OrganizationId, StudentAssignmentInput, StudentId};

/// External member-roster collaborator. The engine only reads it to put
/// human-readable labels on resolved ids; resolution itself never needs it.
pub trait AdministratorRoster: Send + Sync {
    fn administrators(
        &self,
        organization: &OrganizationId,
    ) -> Result<Vec<AdministratorRef>, RosterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("roster unavailable: {0}")]
    Unavailable(String),
}

/// External collaborator that knows how to project a student record down to
/// the fields resolution needs.
pub trait StudentDirectory: Send + Sync {
    fn assignment_input(
        &self,
        student: &StudentId,
    ) -> Result<Option<StudentAssignmentInput>, DirectoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("student directory unavailable: {0}")]
    Unavailable(String),
}
