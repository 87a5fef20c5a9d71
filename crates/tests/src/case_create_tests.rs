use pretty_assertions::assert_eq;

use shared_types::{AppErrorKind, CaseStatus, CreateCaseRequest};

use crate::common::{create_case, login_admin, login_officer, seeded_state};

#[test]
fn created_case_is_prepended_and_initialized_empty() {
    let mut state = seeded_state();
    login_admin(&mut state);

    let before = state.all_cases().len();
    let id = create_case(&mut state, "Burglary - Karol Bagh", "Central Delhi");

    assert_eq!(state.all_cases().len(), before + 1);
    // Most-recent-first ordering
    assert_eq!(state.all_cases()[0].id, id);

    let case = state.find_case(id).unwrap();
    assert!(case.evidence.is_empty());
    assert!(case.notified_officers.is_empty());
    assert!(!case.requires_verification);
    assert_eq!(case.created_by, "Admin Singh");
}

#[test]
fn case_status_is_set_freely() {
    let mut state = seeded_state();
    login_admin(&mut state);

    for status in [CaseStatus::Open, CaseStatus::Investigating, CaseStatus::Closed] {
        let id = state
            .create_case(CreateCaseRequest {
                title: format!("Case {}", status.as_str()),
                description: "Status check".into(),
                district: "Central Delhi".into(),
                status,
            })
            .unwrap();
        assert_eq!(state.find_case(id).unwrap().status, status);
    }
}

#[test]
fn police_officer_cannot_create_cases() {
    let mut state = seeded_state();
    login_officer(&mut state, "police1");

    let err = state
        .create_case(CreateCaseRequest {
            title: "Unauthorized".into(),
            description: "Should fail".into(),
            district: "Central Delhi".into(),
            status: CaseStatus::Open,
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
}

#[test]
fn unauthenticated_create_is_rejected() {
    let mut state = seeded_state();

    let err = state
        .create_case(CreateCaseRequest {
            title: "Anonymous".into(),
            description: "Should fail".into(),
            district: "Central Delhi".into(),
            status: CaseStatus::Open,
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[test]
fn blank_title_fails_validation() {
    let mut state = seeded_state();
    login_admin(&mut state);

    let err = state
        .create_case(CreateCaseRequest {
            title: String::new(),
            description: "No title".into(),
            district: "Central Delhi".into(),
            status: CaseStatus::Open,
        })
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
}

#[test]
fn district_query_scopes_cases() {
    let mut state = seeded_state();
    login_admin(&mut state);
    create_case(&mut state, "Theft - Lajpat Nagar", "South Delhi");

    let south = state.cases_in_district("South Delhi");
    assert!(south.iter().all(|c| c.district == "South Delhi"));
    assert_eq!(south.len(), 2); // seeded hit-and-run plus the new one
}
