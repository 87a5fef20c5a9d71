use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin-facing notification emitted once per evidence submission.
///
/// Case title, officer name, station and contribution percentage are
/// snapshots taken at emission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminNotification {
    pub id: Uuid,
    pub case_id: Uuid,
    pub case_title: String,
    pub officer_id: Uuid,
    pub officer_name: String,
    pub police_station: String,
    pub contribution_percentage: u8,
    pub created_at: DateTime<Utc>,
    /// One-way false to true, via `mark_read`.
    pub read: bool,
}
