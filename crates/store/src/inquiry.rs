use uuid::Uuid;
use validator::Validate;

use shared_types::{AdjustPointsRequest, AppError, Officer, Rank, Verdict};

use crate::access::require_admin;
use crate::cases::CaseStore;
use crate::directory::Directory;

/// Points awarded for a genuine submission.
const GENUINE_AWARD: i64 = 10;
/// Points deducted for credit theft.
const CREDIT_THEFT_PENALTY: i64 = 20;
/// Points deducted for malicious activity.
const MALICIOUS_PENALTY: i64 = 50;
/// Credit theft additionally costs a rank when points fall below this line.
const DEMOTION_LINE: i64 = 50;

/// Result of a verdict for the caller to display.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictOutcome {
    pub officer_id: Uuid,
    pub points: i64,
    pub rank: Rank,
    pub rank_changed: bool,
}

/// Record a verdict on evidence and apply the merit policy to the submitting
/// officer. Admin only.
///
/// Policy: genuine awards points; credit theft penalizes and demotes one
/// rank when the post-penalty balance (before the zero clamp) falls under
/// the demotion line; malicious penalizes and demotes unconditionally.
/// Demotion from the bottom rank is a no-op.
pub fn deliver_verdict(
    actor: &Officer,
    evidence_id: Uuid,
    verdict: Verdict,
    cases: &mut CaseStore,
    directory: &mut Directory,
) -> Result<VerdictOutcome, AppError> {
    require_admin(actor)?;
    let officer_id = cases.update_evidence_status(actor, evidence_id, verdict)?;
    let officer = directory
        .find(officer_id)
        .ok_or_else(|| AppError::not_found(format!("Officer {officer_id} not found")))?;

    let mut points = officer.points;
    let mut rank = officer.rank;
    match verdict {
        Verdict::Genuine => points += GENUINE_AWARD,
        Verdict::CreditTheft => {
            points -= CREDIT_THEFT_PENALTY;
            if points < DEMOTION_LINE {
                rank = rank.downgraded();
            }
        }
        Verdict::Malicious => {
            points -= MALICIOUS_PENALTY;
            rank = rank.downgraded();
        }
    }

    let updated = directory.update_points(actor, officer_id, points)?;
    let rank_changed = rank != officer.rank;
    let updated = if rank_changed {
        directory.update_rank(actor, officer_id, rank)?
    } else {
        updated
    };
    tracing::info!(
        officer_id = %officer_id,
        verdict = verdict.as_str(),
        points = updated.points,
        rank = updated.rank.as_str(),
        "Verdict applied"
    );
    Ok(VerdictOutcome {
        officer_id,
        points: updated.points,
        rank: updated.rank,
        rank_changed,
    })
}

/// Manually adjust an officer's points by a signed delta with a required
/// reason. Admin only. The floor at zero still applies; rank is untouched.
pub fn adjust_points(
    actor: &Officer,
    req: AdjustPointsRequest,
    directory: &mut Directory,
) -> Result<Officer, AppError> {
    require_admin(actor)?;
    req.validate()?;
    let officer = directory
        .find(req.officer_id)
        .ok_or_else(|| AppError::not_found(format!("Officer {} not found", req.officer_id)))?;
    let updated = directory.update_points(actor, req.officer_id, officer.points + req.delta)?;
    tracing::info!(
        officer_id = %req.officer_id,
        delta = req.delta,
        reason = %req.reason,
        points = updated.points,
        "Manual point adjustment"
    );
    Ok(updated)
}
