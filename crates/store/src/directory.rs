use std::rc::Rc;

use uuid::Uuid;
use validator::Validate;

use shared_types::{AppError, Officer, OfficerRecord, OfficerRole, Rank, SignupRequest};

use crate::access::require_admin;
use crate::password;
use crate::persist::{SnapshotStore, DIRECTORY_KEY, SESSION_KEY};

/// Officer directory plus the current session.
///
/// Holds the only mutable copy of account state. Every mutation rewrites the
/// directory snapshot, and the session snapshot where touched; snapshot
/// writes are best-effort and never fail the operation.
pub struct Directory {
    officers: Vec<OfficerRecord>,
    session: Option<Officer>,
    snapshots: Rc<dyn SnapshotStore>,
}

impl Directory {
    /// Restore directory and session from their snapshots. Missing or
    /// corrupt blobs fall back to empty state with a logged warning.
    pub fn load(snapshots: Rc<dyn SnapshotStore>) -> Self {
        let officers = match snapshots.load(DIRECTORY_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Corrupt directory snapshot, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load directory snapshot, starting empty");
                Vec::new()
            }
        };
        let session = match snapshots.load(SESSION_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).map(Some).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Corrupt session snapshot, discarding");
                None
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load session snapshot, discarding");
                None
            }
        };
        Self {
            officers,
            session,
            snapshots,
        }
    }

    /// Replace an empty directory with seed records and persist them.
    /// A non-empty directory is left alone.
    pub fn seed(&mut self, records: Vec<OfficerRecord>) {
        if !self.officers.is_empty() {
            return;
        }
        self.officers = records;
        self.persist_directory();
    }

    pub fn is_empty(&self) -> bool {
        self.officers.is_empty()
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Authenticate by username and credential. Success sets and persists
    /// the session; failure changes nothing. No lockout, no rate limiting.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Officer, AppError> {
        let record = self
            .officers
            .iter()
            .find(|o| o.username == username)
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;
        if !password::verify(password, &record.password_hash)? {
            return Err(AppError::unauthorized("Invalid username or password"));
        }
        let user = Officer::from(record);
        tracing::info!(officer_id = %user.id, username, "Login");
        self.session = Some(user.clone());
        self.persist_session();
        Ok(user)
    }

    /// Register a new police officer. Rank starts at Constable with zero
    /// points; the district is fixed here for good. Auto-authenticates.
    pub fn signup(&mut self, req: SignupRequest) -> Result<Officer, AppError> {
        req.validate()?;
        if self.officers.iter().any(|o| o.username == req.username) {
            return Err(AppError::conflict_field(
                "username",
                "Username already exists",
            ));
        }
        if self.officers.iter().any(|o| o.email == req.email) {
            return Err(AppError::conflict_field("email", "Email already registered"));
        }

        let record = OfficerRecord {
            id: Uuid::new_v4(),
            username: req.username,
            password_hash: password::hash(&req.password)?,
            role: OfficerRole::Police,
            district: Some(req.district),
            rank: Rank::Constable,
            points: 0,
            full_name: req.full_name,
            email: req.email,
            police_station: Some(req.police_station),
        };
        let user = Officer::from(&record);
        tracing::info!(officer_id = %user.id, username = %user.username, "Officer signup");
        self.officers.push(record);
        self.persist_directory();

        self.session = Some(user.clone());
        self.persist_session();
        Ok(user)
    }

    /// Clear the session and its snapshot.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.take() {
            tracing::info!(officer_id = %user.id, "Logout");
        }
        if let Err(e) = self.snapshots.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "Failed to clear session snapshot");
        }
    }

    pub fn current_user(&self) -> Option<&Officer> {
        self.session.as_ref()
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Set an officer's points, clamped at zero. Admin only. Mirrors into
    /// the session when the target is the signed-in user.
    pub fn update_points(
        &mut self,
        actor: &Officer,
        officer_id: Uuid,
        points: i64,
    ) -> Result<Officer, AppError> {
        require_admin(actor)?;
        let clamped = points.max(0);
        let record = self
            .officers
            .iter_mut()
            .find(|o| o.id == officer_id)
            .ok_or_else(|| AppError::not_found(format!("Officer {officer_id} not found")))?;
        record.points = clamped;
        let updated = Officer::from(&*record);
        self.persist_directory();
        self.mirror_into_session(&updated);
        Ok(updated)
    }

    /// Set an officer's rank. Admin only. Mirrors into the session when the
    /// target is the signed-in user.
    pub fn update_rank(
        &mut self,
        actor: &Officer,
        officer_id: Uuid,
        rank: Rank,
    ) -> Result<Officer, AppError> {
        require_admin(actor)?;
        let record = self
            .officers
            .iter_mut()
            .find(|o| o.id == officer_id)
            .ok_or_else(|| AppError::not_found(format!("Officer {officer_id} not found")))?;
        record.rank = rank;
        let updated = Officer::from(&*record);
        self.persist_directory();
        self.mirror_into_session(&updated);
        Ok(updated)
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn find(&self, officer_id: Uuid) -> Option<Officer> {
        self.officers
            .iter()
            .find(|o| o.id == officer_id)
            .map(Officer::from)
    }

    pub fn find_by_username(&self, username: &str) -> Option<Officer> {
        self.officers
            .iter()
            .find(|o| o.username == username)
            .map(Officer::from)
    }

    /// Ids of police officers assigned to `district` (exact match).
    pub fn officers_in_district(&self, district: &str) -> Vec<Uuid> {
        self.officers
            .iter()
            .filter(|o| o.role == OfficerRole::Police && o.district.as_deref() == Some(district))
            .map(|o| o.id)
            .collect()
    }

    // ── Snapshot plumbing ───────────────────────────────────────────

    fn mirror_into_session(&mut self, updated: &Officer) {
        if self.session.as_ref().is_some_and(|s| s.id == updated.id) {
            self.session = Some(updated.clone());
            self.persist_session();
        }
    }

    fn persist_directory(&self) {
        match serde_json::to_string(&self.officers) {
            Ok(blob) => {
                if let Err(e) = self.snapshots.save(DIRECTORY_KEY, &blob) {
                    tracing::warn!(error = %e, "Failed to persist directory snapshot");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize directory snapshot"),
        }
    }

    fn persist_session(&self) {
        let Some(session) = &self.session else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(blob) => {
                if let Err(e) = self.snapshots.save(SESSION_KEY, &blob) {
                    tracing::warn!(error = %e, "Failed to persist session snapshot");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session snapshot"),
        }
    }
}
