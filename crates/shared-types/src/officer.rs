use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered officer rank ladder. Ordering follows declaration order, so
/// `Rank::Constable < Rank::Superintendent` holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Constable,
    HeadConstable,
    SubInspector,
    Inspector,
    Superintendent,
}

impl Rank {
    /// Display string matching departmental titles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Constable => "Constable",
            Rank::HeadConstable => "Head Constable",
            Rank::SubInspector => "Sub-Inspector",
            Rank::Inspector => "Inspector",
            Rank::Superintendent => "Superintendent",
        }
    }

    /// Parse a rank title. Unknown values default to the entry rank.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Head Constable" => Rank::HeadConstable,
            "Sub-Inspector" => Rank::SubInspector,
            "Inspector" => Rank::Inspector,
            "Superintendent" => Rank::Superintendent,
            _ => Rank::Constable,
        }
    }

    /// One step down the ladder. Already at the bottom is a no-op.
    pub fn downgraded(&self) -> Rank {
        match self {
            Rank::Constable => Rank::Constable,
            Rank::HeadConstable => Rank::Constable,
            Rank::SubInspector => Rank::HeadConstable,
            Rank::Inspector => Rank::SubInspector,
            Rank::Superintendent => Rank::Inspector,
        }
    }
}

/// Account role, fixed at creation. Admins run the department; police
/// officers belong to exactly one district.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OfficerRole {
    Admin,
    Police,
}

impl OfficerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfficerRole::Admin => "admin",
            OfficerRole::Police => "police",
        }
    }
}

/// Directory row for an account, including the credential hash.
///
/// Never handed to callers directly; the sanitized [`Officer`] projection is
/// the public shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfficerRecord {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC-format hash, never the plaintext credential.
    pub password_hash: String,
    pub role: OfficerRole,
    /// Present iff `role == Police`; immutable after signup.
    pub district: Option<String>,
    pub rank: Rank,
    /// Merit points, floored at 0. No upper cap.
    pub points: i64,
    pub full_name: String,
    pub email: String,
    pub police_station: Option<String>,
}

/// Public projection of an [`OfficerRecord`] with the credential hash
/// stripped. This is what the session holds and what operations return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Officer {
    pub id: Uuid,
    pub username: String,
    pub role: OfficerRole,
    pub district: Option<String>,
    pub rank: Rank,
    pub points: i64,
    pub full_name: String,
    pub email: String,
    pub police_station: Option<String>,
}

impl From<&OfficerRecord> for Officer {
    fn from(r: &OfficerRecord) -> Self {
        Self {
            id: r.id,
            username: r.username.clone(),
            role: r.role,
            district: r.district.clone(),
            rank: r.rank,
            points: r.points,
            full_name: r.full_name.clone(),
            email: r.email.clone(),
            police_station: r.police_station.clone(),
        }
    }
}

impl Officer {
    pub fn is_admin(&self) -> bool {
        self.role == OfficerRole::Admin
    }

    pub fn is_police(&self) -> bool {
        self.role == OfficerRole::Police
    }
}
