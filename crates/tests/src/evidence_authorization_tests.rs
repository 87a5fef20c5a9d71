use pretty_assertions::assert_eq;

use shared_types::AppErrorKind;

use crate::common::{create_case, evidence_request, login_admin, login_officer, seeded_state};

#[test]
fn cross_district_submission_is_rejected_at_the_store_layer() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Burglary - Saket", "South Delhi");

    // police4 is assigned to North Delhi
    login_officer(&mut state, "police4");
    let err = state
        .submit_evidence(evidence_request(case_id, 80))
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert!(state.find_case(case_id).unwrap().evidence.is_empty());
    assert!(state.admin_notifications().is_empty());
}

#[test]
fn same_district_officer_may_submit() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Burglary - Saket", "South Delhi");

    login_officer(&mut state, "police3");
    assert!(state.submit_evidence(evidence_request(case_id, 80)).is_ok());
}

#[test]
fn admins_do_not_submit_evidence() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Burglary - Saket", "South Delhi");

    let err = state
        .submit_evidence(evidence_request(case_id, 10))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[test]
fn unauthenticated_submission_is_rejected() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Burglary - Saket", "South Delhi");
    state.logout();

    let err = state
        .submit_evidence(evidence_request(case_id, 10))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}
