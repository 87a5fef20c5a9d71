use pretty_assertions::assert_eq;

use shared_types::{AppErrorKind, OfficerRole, Rank};

use crate::common::{seeded_state, signup_request};

#[test]
fn signup_creates_constable_with_zero_points_and_signs_in() {
    let mut state = seeded_state();

    let user = state
        .signup(signup_request("police9", "nine@police.gov.in", "East Delhi"))
        .unwrap();

    assert_eq!(user.role, OfficerRole::Police);
    assert_eq!(user.rank, Rank::Constable);
    assert_eq!(user.points, 0);
    assert_eq!(user.district.as_deref(), Some("East Delhi"));
    // Auto-authenticated
    assert_eq!(state.current_user().unwrap().id, user.id);
}

#[test]
fn new_officer_can_log_back_in_with_their_password() {
    let mut state = seeded_state();

    state
        .signup(signup_request("police9", "nine@police.gov.in", "East Delhi"))
        .unwrap();
    state.logout();

    let user = state.login("police9", "letmein99").unwrap();
    assert_eq!(user.username, "police9");
}

#[test]
fn duplicate_username_is_a_conflict() {
    let mut state = seeded_state();

    let err = state
        .signup(signup_request("police1", "fresh@police.gov.in", "East Delhi"))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert!(err.field_errors.contains_key("username"));
}

#[test]
fn duplicate_email_is_a_conflict() {
    let mut state = seeded_state();

    let err = state
        .signup(signup_request("police9", "rajesh@police.gov.in", "East Delhi"))
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert!(err.field_errors.contains_key("email"));
}

#[test]
fn missing_fields_fail_validation_before_any_mutation() {
    let mut state = seeded_state();

    let mut req = signup_request("police9", "nine@police.gov.in", "East Delhi");
    req.district = String::new();
    let err = state.signup(req).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("district"));

    // The rejected signup left no account behind
    assert!(state.login("police9", "letmein99").is_err());
}

#[test]
fn usernames_and_emails_stay_pairwise_distinct() {
    let mut state = seeded_state();

    for i in 0..5 {
        state
            .signup(signup_request(
                &format!("recruit{i}"),
                &format!("recruit{i}@police.gov.in"),
                "East Delhi",
            ))
            .unwrap();
    }

    // Every combination of an existing username or email is rejected
    for i in 0..5 {
        assert!(state
            .signup(signup_request(
                &format!("recruit{i}"),
                "unique@police.gov.in",
                "East Delhi",
            ))
            .is_err());
        assert!(state
            .signup(signup_request(
                "unique-name",
                &format!("recruit{i}@police.gov.in"),
                "East Delhi",
            ))
            .is_err());
    }
}
