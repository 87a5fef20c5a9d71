use std::rc::Rc;

use uuid::Uuid;

use shared_types::{
    AdjustPointsRequest, AdminNotification, AppError, Case, CreateCaseRequest, Evidence,
    NotifyOfficersRequest, Officer, Rank, SignupRequest, StoreConfig, SubmitEvidenceRequest,
    Verdict,
};

use crate::cases::CaseStore;
use crate::directory::Directory;
use crate::inquiry::{self, VerdictOutcome};
use crate::notifications::NotificationStore;
use crate::persist::SnapshotStore;
use crate::seed;

/// The application-state service: directory and session, case store, and
/// notification store wired together over an injected snapshot backend.
///
/// Mutating operations resolve the acting user from the session and hand it
/// to the component stores, which enforce role and district authorization
/// themselves. All calls are synchronous; there is exactly one logical actor
/// at a time.
pub struct AppState {
    pub directory: Directory,
    pub cases: CaseStore,
    pub notifications: NotificationStore,
}

impl AppState {
    /// Restore state from snapshots, seeding demo data where configured and
    /// nothing was saved yet.
    pub fn open(config: &StoreConfig, snapshots: Rc<dyn SnapshotStore>) -> Self {
        let mut directory = Directory::load(snapshots);
        if config.seed_demo_data && directory.is_empty() {
            match seed::demo_officers() {
                Ok(records) => directory.seed(records),
                Err(e) => tracing::warn!(error = %e, "Failed to build seed directory"),
            }
        }

        let mut cases = CaseStore::new();
        if config.seed_demo_data {
            cases.seed(seed::demo_cases(&directory));
        }

        Self {
            directory,
            cases,
            notifications: NotificationStore::new(),
        }
    }

    fn actor(&self) -> Result<Officer, AppError> {
        self.directory
            .current_user()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Not signed in"))
    }

    // ── Session ─────────────────────────────────────────────────────

    pub fn login(&mut self, username: &str, password: &str) -> Result<Officer, AppError> {
        self.directory.login(username, password)
    }

    pub fn signup(&mut self, req: SignupRequest) -> Result<Officer, AppError> {
        self.directory.signup(req)
    }

    pub fn logout(&mut self) {
        self.directory.logout();
    }

    pub fn current_user(&self) -> Option<&Officer> {
        self.directory.current_user()
    }

    // ── Cases and evidence ──────────────────────────────────────────

    pub fn create_case(&mut self, req: CreateCaseRequest) -> Result<Uuid, AppError> {
        let actor = self.actor()?;
        self.cases.create_case(&actor, req)
    }

    pub fn submit_evidence(&mut self, req: SubmitEvidenceRequest) -> Result<Uuid, AppError> {
        let actor = self.actor()?;
        self.cases
            .submit_evidence(&actor, req, &mut self.notifications)
    }

    pub fn notify_district_officers(&mut self, req: NotifyOfficersRequest) -> Result<(), AppError> {
        let actor = self.actor()?;
        self.cases.notify_district_officers(&actor, req)
    }

    pub fn all_cases(&self) -> &[Case] {
        self.cases.all_cases()
    }

    pub fn cases_in_district(&self, district: &str) -> Vec<&Case> {
        self.cases.cases_in_district(district)
    }

    pub fn find_case(&self, case_id: Uuid) -> Option<&Case> {
        self.cases.find_case(case_id)
    }

    pub fn submissions_by_officer(&self, officer_id: Uuid) -> Vec<&Evidence> {
        self.cases.submissions_by_officer(officer_id)
    }

    pub fn cases_needing_review(&self) -> Vec<&Case> {
        self.cases.cases_needing_review()
    }

    // ── Inquiry panel ───────────────────────────────────────────────

    pub fn deliver_verdict(
        &mut self,
        evidence_id: Uuid,
        verdict: Verdict,
    ) -> Result<VerdictOutcome, AppError> {
        let actor = self.actor()?;
        inquiry::deliver_verdict(
            &actor,
            evidence_id,
            verdict,
            &mut self.cases,
            &mut self.directory,
        )
    }

    pub fn adjust_points(&mut self, req: AdjustPointsRequest) -> Result<Officer, AppError> {
        let actor = self.actor()?;
        inquiry::adjust_points(&actor, req, &mut self.directory)
    }

    // ── Directory ───────────────────────────────────────────────────

    pub fn set_officer_points(
        &mut self,
        officer_id: Uuid,
        points: i64,
    ) -> Result<Officer, AppError> {
        let actor = self.actor()?;
        self.directory.update_points(&actor, officer_id, points)
    }

    pub fn set_officer_rank(&mut self, officer_id: Uuid, rank: Rank) -> Result<Officer, AppError> {
        let actor = self.actor()?;
        self.directory.update_rank(&actor, officer_id, rank)
    }

    pub fn find_officer(&self, officer_id: Uuid) -> Option<Officer> {
        self.directory.find(officer_id)
    }

    pub fn officers_in_district(&self, district: &str) -> Vec<Uuid> {
        self.directory.officers_in_district(district)
    }

    // ── Notifications ───────────────────────────────────────────────

    pub fn mark_notification_read(&mut self, id: Uuid) -> Result<(), AppError> {
        self.notifications.mark_read(id)
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.unread_count()
    }

    pub fn admin_notifications(&self) -> &[AdminNotification] {
        self.notifications.all()
    }
}
