use shared_types::{AppError, Officer};

/// Require that the acting user is an admin.
pub fn require_admin(actor: &Officer) -> Result<(), AppError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden("Admin role required"))
    }
}

/// Require that the acting user is a police officer assigned to `district`.
///
/// District scoping is enforced here, in the trusted store layer, not in
/// rendering logic: a cross-district write is rejected even if a client
/// surfaced the affordance.
pub fn require_officer_of_district(actor: &Officer, district: &str) -> Result<(), AppError> {
    if !actor.is_police() {
        return Err(AppError::forbidden("Police role required"));
    }
    match actor.district.as_deref() {
        Some(d) if d == district => Ok(()),
        _ => Err(AppError::forbidden(format!(
            "Officer is not assigned to district {district}"
        ))),
    }
}
