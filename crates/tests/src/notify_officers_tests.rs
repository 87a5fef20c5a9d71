use pretty_assertions::assert_eq;

use shared_types::{AppErrorKind, NotifyOfficersRequest};
use uuid::Uuid;

use crate::common::{create_case, login_admin, login_officer, seeded_state};

#[test]
fn notified_officer_list_is_replaced() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "All Hands", "Central Delhi");
    let officers = state.officers_in_district("Central Delhi");
    assert!(!officers.is_empty());

    state
        .notify_district_officers(NotifyOfficersRequest {
            case_id,
            district: "Central Delhi".into(),
            officer_ids: officers.clone(),
        })
        .unwrap();
    assert_eq!(state.find_case(case_id).unwrap().notified_officers, officers);

    // A later call replaces rather than appends
    state
        .notify_district_officers(NotifyOfficersRequest {
            case_id,
            district: "Central Delhi".into(),
            officer_ids: vec![officers[0]],
        })
        .unwrap();
    assert_eq!(
        state.find_case(case_id).unwrap().notified_officers,
        vec![officers[0]]
    );
}

#[test]
fn district_mismatch_is_an_explicit_error() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Wrong District", "Central Delhi");

    let err = state
        .notify_district_officers(NotifyOfficersRequest {
            case_id,
            district: "South Delhi".into(),
            officer_ids: state.officers_in_district("South Delhi"),
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(state.find_case(case_id).unwrap().notified_officers.is_empty());
}

#[test]
fn unknown_case_is_not_found() {
    let mut state = seeded_state();
    login_admin(&mut state);

    let err = state
        .notify_district_officers(NotifyOfficersRequest {
            case_id: Uuid::new_v4(),
            district: "Central Delhi".into(),
            officer_ids: vec![],
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn only_admins_notify_officers() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Officer Attempt", "Central Delhi");

    login_officer(&mut state, "police1");
    let err = state
        .notify_district_officers(NotifyOfficersRequest {
            case_id,
            district: "Central Delhi".into(),
            officer_ids: vec![],
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}
