use std::sync::Arc;

use super::directory::{
    AdministratorRoster, DirectoryError, RosterError, StudentDirectory,
};
use super::domain::{
    AdministratorRef, Assignment, AssignmentConfig, OrganizationId, StudentId,
};
use super::resolver::resolve;

/// Service composing the student directory, the administrator roster, and
/// an immutable config snapshot taken at construction time.
///
/// The snapshot is read-only: concurrent referral-creation requests may
/// share one service without locking. Editing produces a new config and a
/// new service.
pub struct ReferralAssignmentService<R, D> {
    roster: Arc<R>,
    directory: Arc<D>,
    organization: OrganizationId,
    config: AssignmentConfig,
}

impl<R, D> ReferralAssignmentService<R, D>
where
    R: AdministratorRoster + 'static,
    D: StudentDirectory + 'static,
{
    pub fn new(
        roster: Arc<R>,
        directory: Arc<D>,
        organization: OrganizationId,
        config: AssignmentConfig,
    ) -> Self {
        Self {
            roster,
            directory,
            organization,
            config,
        }
    }

    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Route one incoming referral: project the student, resolve, and put a
    /// display name on the result when the assigned id is still on the
    /// roster. A stale id stays assigned with no roster entry; detecting
    /// staleness is the caller's concern.
    pub fn route_referral(
        &self,
        student: &StudentId,
    ) -> Result<RoutedReferral, ReferralRoutingError> {
        let input = self
            .directory
            .assignment_input(student)?
            .ok_or_else(|| ReferralRoutingError::UnknownStudent {
                student: student.clone(),
            })?;

        let assignment = resolve(&self.config, &input);

        let administrator = match assignment.assigned_to() {
            Some(id) => self
                .roster
                .administrators(&self.organization)?
                .into_iter()
                .find(|entry| &entry.id == id),
            None => None,
        };

        Ok(RoutedReferral {
            student: student.clone(),
            assignment,
            administrator,
        })
    }

    /// Roster passthrough for editing surfaces that need labels.
    pub fn administrators(&self) -> Result<Vec<AdministratorRef>, ReferralRoutingError> {
        Ok(self.roster.administrators(&self.organization)?)
    }
}

/// Outcome of routing one referral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedReferral {
    pub student: StudentId,
    pub assignment: Assignment,
    pub administrator: Option<AdministratorRef>,
}

impl RoutedReferral {
    pub fn summary(&self) -> String {
        match (&self.assignment, &self.administrator) {
            (Assignment::Assigned(id), Some(entry)) => {
                format!("assigned to {} ({})", entry.display_name, id)
            }
            (Assignment::Assigned(id), None) => {
                format!("assigned to {id} (not on current roster)")
            }
            (Assignment::Unassigned, _) => "unassigned".to_string(),
        }
    }
}

/// Error raised by the routing service.
#[derive(Debug, thiserror::Error)]
pub enum ReferralRoutingError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("student '{student}' is not in the directory")]
    UnknownStudent { student: StudentId },
}
