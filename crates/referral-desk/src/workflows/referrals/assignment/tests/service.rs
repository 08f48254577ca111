use std::sync::Arc;

use super::common::*;
use crate::workflows::referrals::assignment::domain::{Assignment, StudentId};
use crate::workflows::referrals::assignment::{
    ReferralAssignmentService, ReferralRoutingError,
};

fn student(id: &str) -> StudentId {
    StudentId(id.to_string())
}

#[test]
fn routes_a_referral_and_decorates_with_display_name() {
    let directory = MemoryDirectory::with(&[("stu-1", grade_input("9"))]);
    let service = build_service(directory, grade_config());

    let routed = service.route_referral(&student("stu-1")).expect("routes");

    assert_eq!(routed.assignment, Assignment::Assigned(admin("admin-a")));
    let entry = routed.administrator.as_ref().expect("roster entry attached");
    assert_eq!(entry.display_name, "Dana Whitfield");
    assert_eq!(routed.summary(), "assigned to Dana Whitfield (admin-a)");
}

#[test]
fn unmapped_students_come_back_unassigned() {
    let directory = MemoryDirectory::with(&[("stu-2", grade_input("8"))]);
    let service = build_service(directory, grade_config());

    let routed = service.route_referral(&student("stu-2")).expect("routes");

    assert_eq!(routed.assignment, Assignment::Unassigned);
    assert!(routed.administrator.is_none());
    assert_eq!(routed.summary(), "unassigned");
}

#[test]
fn stale_administrator_ids_stay_assigned_without_roster_entry() {
    // The config may reference an administrator who has since left; the
    // resolution stands and staleness is left to the caller.
    let config = crate::workflows::referrals::assignment::apply_grade_mapping(
        grade_config(),
        "7",
        admin("admin-gone"),
    );
    let directory = MemoryDirectory::with(&[("stu-3", grade_input("7"))]);
    let service = build_service(directory, config);

    let routed = service.route_referral(&student("stu-3")).expect("routes");

    assert_eq!(routed.assignment, Assignment::Assigned(admin("admin-gone")));
    assert!(routed.administrator.is_none());
    assert_eq!(
        routed.summary(),
        "assigned to admin-gone (not on current roster)"
    );
}

#[test]
fn unknown_students_surface_a_routing_error() {
    let service = build_service(MemoryDirectory::default(), grade_config());

    let err = service
        .route_referral(&student("stu-missing"))
        .expect_err("unknown student");

    assert!(matches!(
        err,
        ReferralRoutingError::UnknownStudent { ref student } if student.0 == "stu-missing"
    ));
}

#[test]
fn directory_failures_propagate() {
    let service = ReferralAssignmentService::new(
        Arc::new(MemoryRoster {
            entries: roster_entries(),
        }),
        Arc::new(UnavailableDirectory),
        organization(),
        grade_config(),
    );

    let err = service
        .route_referral(&student("stu-1"))
        .expect_err("directory offline");
    assert!(matches!(err, ReferralRoutingError::Directory(_)));
}

#[test]
fn unassigned_resolutions_never_touch_the_roster() {
    let directory = MemoryDirectory::with(&[("stu-4", grade_input("8"))]);
    let service = ReferralAssignmentService::new(
        Arc::new(UnavailableRoster),
        Arc::new(directory),
        organization(),
        grade_config(),
    );

    let routed = service.route_referral(&student("stu-4")).expect("routes");
    assert_eq!(routed.assignment, Assignment::Unassigned);
}

#[test]
fn roster_failures_propagate_for_assigned_resolutions() {
    let directory = MemoryDirectory::with(&[("stu-5", grade_input("9"))]);
    let service = ReferralAssignmentService::new(
        Arc::new(UnavailableRoster),
        Arc::new(directory),
        organization(),
        grade_config(),
    );

    let err = service
        .route_referral(&student("stu-5"))
        .expect_err("roster offline");
    assert!(matches!(err, ReferralRoutingError::Roster(_)));
}

#[test]
fn administrators_passthrough_lists_the_roster() {
    let service = build_service(MemoryDirectory::default(), grade_config());

    let entries = service.administrators().expect("roster lists");
    assert_eq!(entries, roster_entries());
}
