use uuid::Uuid;

use shared_types::{AdminNotification, AppError};

/// Unbounded, most-recent-first list of admin notifications.
///
/// Entries are emitted by evidence submission and never deleted; the only
/// mutation after insertion is the one-way read flag.
#[derive(Default)]
pub struct NotificationStore {
    items: Vec<AdminNotification>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a notification.
    pub fn add(&mut self, notification: AdminNotification) {
        self.items.insert(0, notification);
    }

    /// Flip the read flag to true. Marking an already-read entry is an
    /// idempotent success; an unknown id is an error.
    pub fn mark_read(&mut self, id: Uuid) -> Result<(), AppError> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))?;
        item.read = true;
        Ok(())
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// All notifications, most recent first.
    pub fn all(&self) -> &[AdminNotification] {
        &self.items
    }
}
