//! Automatic referral-assignment configuration and resolution.
//!
//! Three layers, bottom-up: the [`AssignmentConfig`] model with its
//! validator, the pure [`resolve`] function mapping a student to zero or
//! one administrator, and the editing operations that build a config
//! interactively while preserving the inactive policy's mappings across
//! mode switches. [`ReferralAssignmentService`] composes the config with
//! the external roster and directory collaborators.

pub mod directory;
pub mod domain;
mod range;
pub mod resolver;
pub mod service;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use directory::{AdministratorRoster, DirectoryError, RosterError, StudentDirectory};
pub use domain::{
    AdministratorId, AdministratorRef, Assignment, AssignmentConfig, AssignmentPolicyType,
    LetterRangeMapping, NameField, OrganizationId, StudentAssignmentInput, StudentId,
};
pub use range::normalize_range_spec;
pub use resolver::resolve;
pub use service::{ReferralAssignmentService, ReferralRoutingError, RoutedReferral};
pub use session::{
    apply_grade_mapping, apply_letter_range_mapping, remove_grade_mapping,
    remove_letter_range_mapping, set_name_field, switch_policy, ConfigEditingSession,
};
pub use validation::{validate, ConfigViolation, ViolationKind};
