use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::officer::Rank;

/// Evidence contribution share above which a claim counts as "high".
pub const HIGH_CONTRIBUTION_THRESHOLD: u8 = 50;

/// Case workflow status. The workflow places no ordering constraint on
/// transitions; admins set the status freely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStatus {
    Open,
    Investigating,
    Closed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Open => "open",
            CaseStatus::Investigating => "investigating",
            CaseStatus::Closed => "closed",
        }
    }
}

/// Medium of an evidence submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EvidenceKind {
    Text,
    Image,
    Video,
}

/// Self-declared role the submitting officer played in the investigation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContributionRole {
    LeadInvestigator,
    SupportInvestigator,
    FieldAssistance,
}

impl ContributionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionRole::LeadInvestigator => "Lead Investigator",
            ContributionRole::SupportInvestigator => "Support Investigator",
            ContributionRole::FieldAssistance => "Field Assistance",
        }
    }
}

/// Inquiry-panel decision on an evidence submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    Genuine,
    CreditTheft,
    Malicious,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Genuine => "genuine",
            Verdict::CreditTheft => "credit-theft",
            Verdict::Malicious => "malicious",
        }
    }
}

/// Adjudication state of an evidence submission. Once a verdict lands the
/// state is terminal; re-judging is rejected at the store layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EvidenceStatus {
    #[default]
    Pending,
    Judged(Verdict),
}

impl EvidenceStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, EvidenceStatus::Pending)
    }
}

/// One evidence submission, owned by exactly one case.
///
/// Officer name and rank are denormalized snapshots taken at submission time;
/// later rank changes do not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evidence {
    pub id: Uuid,
    pub case_id: Uuid,
    pub officer_id: Uuid,
    pub officer_name: String,
    pub officer_rank: Rank,
    pub kind: EvidenceKind,
    pub content: String,
    pub description: String,
    pub submitted_at: DateTime<Utc>,
    /// Self-declared share of the credit, 0-100.
    pub contribution_percentage: u8,
    pub contribution_role: ContributionRole,
    pub status: EvidenceStatus,
}

impl Evidence {
    pub fn claims_high_contribution(&self) -> bool {
        self.contribution_percentage > HIGH_CONTRIBUTION_THRESHOLD
    }
}

/// A department case. District is the immutable ownership scope; only
/// officers of that district may submit evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub district: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub status: CaseStatus,
    pub evidence: Vec<Evidence>,
    /// Officers of the district notified about this case.
    pub notified_officers: Vec<Uuid>,
    /// Derived: more than one submission claims over 50% contribution.
    pub requires_verification: bool,
}

impl Case {
    /// Recompute the credit-dispute flag over the current evidence list.
    /// Called after every evidence insertion.
    pub fn refresh_verification_flag(&mut self) {
        let high_claims = self
            .evidence
            .iter()
            .filter(|e| e.claims_high_contribution())
            .count();
        self.requires_verification = high_claims > 1;
    }

    /// Cases with more than one submission are eligible for inquiry review.
    pub fn needs_review(&self) -> bool {
        self.evidence.len() > 1
    }
}
