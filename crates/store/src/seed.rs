use chrono::{Duration, Utc};
use uuid::Uuid;

use shared_types::{
    AppError, Case, CaseStatus, ContributionRole, Evidence, EvidenceKind, EvidenceStatus,
    OfficerRecord, OfficerRole, Rank, Verdict,
};

use crate::directory::Directory;
use crate::password;

struct SeedOfficer {
    username: &'static str,
    password: &'static str,
    role: OfficerRole,
    district: Option<&'static str>,
    police_station: Option<&'static str>,
    rank: Rank,
    points: i64,
    full_name: &'static str,
    email: &'static str,
}

const SEED_OFFICERS: &[SeedOfficer] = &[
    SeedOfficer {
        username: "admin",
        password: "admin123",
        role: OfficerRole::Admin,
        district: None,
        police_station: None,
        rank: Rank::Superintendent,
        points: 0,
        full_name: "Admin Singh",
        email: "admin@police.gov.in",
    },
    SeedOfficer {
        username: "police1",
        password: "police123",
        role: OfficerRole::Police,
        district: Some("Central Delhi"),
        police_station: Some("Connaught Place PS"),
        rank: Rank::Inspector,
        points: 100,
        full_name: "Rajesh Kumar",
        email: "rajesh@police.gov.in",
    },
    SeedOfficer {
        username: "police2",
        password: "police123",
        role: OfficerRole::Police,
        district: Some("Central Delhi"),
        police_station: Some("Paharganj PS"),
        rank: Rank::SubInspector,
        points: 85,
        full_name: "Amit Sharma",
        email: "amit@police.gov.in",
    },
    SeedOfficer {
        username: "police3",
        password: "police123",
        role: OfficerRole::Police,
        district: Some("South Delhi"),
        police_station: Some("Hauz Khas PS"),
        rank: Rank::Inspector,
        points: 95,
        full_name: "Priya Verma",
        email: "priya@police.gov.in",
    },
    SeedOfficer {
        username: "police4",
        password: "police123",
        role: OfficerRole::Police,
        district: Some("North Delhi"),
        police_station: Some("Civil Lines PS"),
        rank: Rank::Constable,
        points: 70,
        full_name: "Suresh Yadav",
        email: "suresh@police.gov.in",
    },
];

/// Demo directory: one admin and four officers across three districts.
/// Demo credentials are hashed here like any real signup.
pub fn demo_officers() -> Result<Vec<OfficerRecord>, AppError> {
    SEED_OFFICERS
        .iter()
        .map(|s| {
            Ok(OfficerRecord {
                id: Uuid::new_v4(),
                username: s.username.to_string(),
                password_hash: password::hash(s.password)?,
                role: s.role,
                district: s.district.map(String::from),
                rank: s.rank,
                points: s.points,
                full_name: s.full_name.to_string(),
                email: s.email.to_string(),
                police_station: s.police_station.map(String::from),
            })
        })
        .collect()
}

/// Demo cases referencing the seeded officers by username, so the fixtures
/// stay coherent whether the directory was freshly seeded or restored from
/// a snapshot.
pub fn demo_cases(directory: &Directory) -> Vec<Case> {
    let rajesh = directory.find_by_username("police1");
    let amit = directory.find_by_username("police2");
    let priya = directory.find_by_username("police3");

    let robbery_id = Uuid::new_v4();
    let mut robbery_evidence = Vec::new();
    if let Some(rajesh) = &rajesh {
        robbery_evidence.push(Evidence {
            id: Uuid::new_v4(),
            case_id: robbery_id,
            officer_id: rajesh.id,
            officer_name: rajesh.full_name.clone(),
            officer_rank: rajesh.rank,
            kind: EvidenceKind::Text,
            content: "CCTV footage shows two suspects wearing helmets".into(),
            description: "Initial investigation report with CCTV analysis".into(),
            submitted_at: Utc::now() - Duration::hours(36),
            contribution_percentage: 90,
            contribution_role: ContributionRole::LeadInvestigator,
            status: EvidenceStatus::Judged(Verdict::Genuine),
        });
    }

    let mut robbery = Case {
        id: robbery_id,
        title: "Robbery at Connaught Place".into(),
        description: "Armed robbery reported at a jewelry store. Two suspects fled on motorcycle."
            .into(),
        district: "Central Delhi".into(),
        created_by: "Admin Singh".into(),
        created_at: Utc::now() - Duration::days(2),
        status: CaseStatus::Investigating,
        evidence: robbery_evidence,
        notified_officers: [&rajesh, &amit]
            .iter()
            .filter_map(|o| o.as_ref().map(|o| o.id))
            .collect(),
        requires_verification: false,
    };
    robbery.refresh_verification_flag();

    let hit_and_run = Case {
        id: Uuid::new_v4(),
        title: "Hit and Run - Ring Road".into(),
        description: "Vehicle collision with pedestrian. Driver absconded from scene.".into(),
        district: "South Delhi".into(),
        created_by: "Admin Singh".into(),
        created_at: Utc::now() - Duration::days(5),
        status: CaseStatus::Open,
        evidence: Vec::new(),
        notified_officers: priya.iter().map(|o| o.id).collect(),
        requires_verification: false,
    };

    vec![robbery, hit_and_run]
}
