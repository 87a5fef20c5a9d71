use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::case::{CaseStatus, ContributionRole, EvidenceKind};

/// Request DTO for officer signup. Role is always police and rank always
/// Constable; neither is caller-selectable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Police station is required"))]
    pub police_station: String,
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
}

/// Request DTO for creating a case.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCaseRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,
    pub status: CaseStatus,
}

/// Request DTO for submitting evidence to a case. The submitting officer's
/// identity comes from the session, never from the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitEvidenceRequest {
    pub case_id: Uuid,
    pub kind: EvidenceKind,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(max = 100, message = "Contribution percentage must be between 0 and 100"))]
    pub contribution_percentage: u8,
    pub contribution_role: ContributionRole,
}

/// Request DTO for replacing a case's notified-officer list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyOfficersRequest {
    pub case_id: Uuid,
    pub district: String,
    pub officer_ids: Vec<Uuid>,
}

/// Request DTO for a manual point adjustment outside the verdict policy.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdjustPointsRequest {
    pub officer_id: Uuid,
    /// Signed delta; positive rewards, negative penalizes.
    pub delta: i64,
    #[validate(length(min = 1, message = "A reason for the adjustment is required"))]
    pub reason: String,
}
