use pretty_assertions::assert_eq;

use shared_types::AppErrorKind;
use uuid::Uuid;

use crate::common::{create_case, evidence_request, login_admin, login_officer, seeded_state};

#[test]
fn three_submissions_one_read_leaves_two_unread() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Busy Case", "Central Delhi");

    login_officer(&mut state, "police1");
    state.submit_evidence(evidence_request(case_id, 60)).unwrap();
    state.submit_evidence(evidence_request(case_id, 20)).unwrap();
    login_officer(&mut state, "police2");
    state.submit_evidence(evidence_request(case_id, 30)).unwrap();

    assert_eq!(state.unread_notification_count(), 3);

    let first_id = state.admin_notifications()[0].id;
    state.mark_notification_read(first_id).unwrap();
    assert_eq!(state.unread_notification_count(), 2);
}

#[test]
fn notifications_are_most_recent_first() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let early = create_case(&mut state, "Early Case", "Central Delhi");
    let late = create_case(&mut state, "Late Case", "Central Delhi");

    login_officer(&mut state, "police1");
    state.submit_evidence(evidence_request(early, 30)).unwrap();
    state.submit_evidence(evidence_request(late, 30)).unwrap();

    assert_eq!(state.admin_notifications()[0].case_title, "Late Case");
    assert_eq!(state.admin_notifications()[1].case_title, "Early Case");
}

#[test]
fn marking_read_twice_stays_read() {
    let mut state = seeded_state();
    login_admin(&mut state);
    let case_id = create_case(&mut state, "Read Twice", "Central Delhi");

    login_officer(&mut state, "police1");
    state.submit_evidence(evidence_request(case_id, 30)).unwrap();
    let id = state.admin_notifications()[0].id;

    state.mark_notification_read(id).unwrap();
    state.mark_notification_read(id).unwrap();
    assert_eq!(state.unread_notification_count(), 0);
    assert!(state.admin_notifications()[0].read);
}

#[test]
fn unknown_notification_id_is_not_found() {
    let mut state = seeded_state();

    let err = state.mark_notification_read(Uuid::new_v4()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
