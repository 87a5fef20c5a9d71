use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use shared_types::{
    AdminNotification, AppError, Case, CreateCaseRequest, Evidence, EvidenceStatus,
    NotifyOfficersRequest, Officer, SubmitEvidenceRequest, Verdict,
};

use crate::access::{require_admin, require_officer_of_district};
use crate::notifications::NotificationStore;

/// Ordered collection of cases, most recent first. Each case exclusively
/// owns its evidence list.
///
/// Case state is volatile by design: only the directory and session are
/// snapshotted, so a restart starts from seeds.
#[derive(Default)]
pub struct CaseStore {
    cases: Vec<Case>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install seed cases into an empty store.
    pub fn seed(&mut self, cases: Vec<Case>) {
        if self.cases.is_empty() {
            self.cases = cases;
        }
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Create a case in a district. Admin only.
    pub fn create_case(
        &mut self,
        actor: &Officer,
        req: CreateCaseRequest,
    ) -> Result<Uuid, AppError> {
        require_admin(actor)?;
        req.validate()?;

        let case = Case {
            id: Uuid::new_v4(),
            title: req.title,
            description: req.description,
            district: req.district,
            created_by: actor.full_name.clone(),
            created_at: Utc::now(),
            status: req.status,
            evidence: Vec::new(),
            notified_officers: Vec::new(),
            requires_verification: false,
        };
        let id = case.id;
        tracing::info!(case_id = %id, district = %case.district, "Case created");
        self.cases.insert(0, case);
        Ok(id)
    }

    /// Submit evidence to a case. The actor must be a police officer of the
    /// case's district; the submission starts pending, the case's
    /// verification flag is recomputed, and one admin notification is
    /// emitted.
    pub fn submit_evidence(
        &mut self,
        actor: &Officer,
        req: SubmitEvidenceRequest,
        notifications: &mut NotificationStore,
    ) -> Result<Uuid, AppError> {
        req.validate()?;
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == req.case_id)
            .ok_or_else(|| AppError::not_found(format!("Case {} not found", req.case_id)))?;
        require_officer_of_district(actor, &case.district)?;

        let evidence = Evidence {
            id: Uuid::new_v4(),
            case_id: case.id,
            officer_id: actor.id,
            officer_name: actor.full_name.clone(),
            officer_rank: actor.rank,
            kind: req.kind,
            content: req.content,
            description: req.description,
            submitted_at: Utc::now(),
            contribution_percentage: req.contribution_percentage,
            contribution_role: req.contribution_role,
            status: EvidenceStatus::Pending,
        };
        let evidence_id = evidence.id;
        tracing::info!(
            case_id = %case.id,
            evidence_id = %evidence_id,
            officer_id = %actor.id,
            contribution = evidence.contribution_percentage,
            "Evidence submitted"
        );
        case.evidence.push(evidence);
        case.refresh_verification_flag();

        notifications.add(AdminNotification {
            id: Uuid::new_v4(),
            case_id: case.id,
            case_title: case.title.clone(),
            officer_id: actor.id,
            officer_name: actor.full_name.clone(),
            police_station: actor.police_station.clone().unwrap_or_default(),
            contribution_percentage: req.contribution_percentage,
            created_at: Utc::now(),
            read: false,
        });
        Ok(evidence_id)
    }

    /// Record a verdict on a piece of evidence. Admin only. A verdict is
    /// terminal: judging already-judged evidence is a conflict. Returns the
    /// submitting officer's id for the point adjustment that follows.
    pub fn update_evidence_status(
        &mut self,
        actor: &Officer,
        evidence_id: Uuid,
        verdict: Verdict,
    ) -> Result<Uuid, AppError> {
        require_admin(actor)?;
        let evidence = self
            .cases
            .iter_mut()
            .flat_map(|c| c.evidence.iter_mut())
            .find(|e| e.id == evidence_id)
            .ok_or_else(|| AppError::not_found(format!("Evidence {evidence_id} not found")))?;
        if !evidence.status.is_pending() {
            return Err(AppError::conflict(format!(
                "Evidence {evidence_id} has already been judged"
            )));
        }
        evidence.status = EvidenceStatus::Judged(verdict);
        tracing::info!(
            evidence_id = %evidence_id,
            officer_id = %evidence.officer_id,
            verdict = verdict.as_str(),
            "Evidence judged"
        );
        Ok(evidence.officer_id)
    }

    /// Replace a case's notified-officer list. Admin only. The district must
    /// match the case's owning district; a mismatch is a caller error and is
    /// rejected rather than silently ignored.
    pub fn notify_district_officers(
        &mut self,
        actor: &Officer,
        req: NotifyOfficersRequest,
    ) -> Result<(), AppError> {
        require_admin(actor)?;
        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == req.case_id)
            .ok_or_else(|| AppError::not_found(format!("Case {} not found", req.case_id)))?;
        if case.district != req.district {
            return Err(AppError::bad_request(format!(
                "Case {} belongs to district {}, not {}",
                req.case_id, case.district, req.district
            )));
        }
        case.notified_officers = req.officer_ids;
        Ok(())
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn all_cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn cases_in_district(&self, district: &str) -> Vec<&Case> {
        self.cases
            .iter()
            .filter(|c| c.district == district)
            .collect()
    }

    pub fn find_case(&self, case_id: Uuid) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == case_id)
    }

    pub fn find_evidence(&self, evidence_id: Uuid) -> Option<&Evidence> {
        self.cases
            .iter()
            .flat_map(|c| c.evidence.iter())
            .find(|e| e.id == evidence_id)
    }

    /// Every submission made by one officer, across all cases.
    pub fn submissions_by_officer(&self, officer_id: Uuid) -> Vec<&Evidence> {
        self.cases
            .iter()
            .flat_map(|c| c.evidence.iter())
            .filter(|e| e.officer_id == officer_id)
            .collect()
    }

    /// Cases with more than one submission, the inquiry panel's working set.
    pub fn cases_needing_review(&self) -> Vec<&Case> {
        self.cases.iter().filter(|c| c.needs_review()).collect()
    }
}
