pub mod access;
pub mod app;
pub mod cases;
pub mod config;
pub mod directory;
pub mod inquiry;
pub mod notifications;
pub mod password;
pub mod persist;
pub mod seed;

pub use app::AppState;
pub use cases::CaseStore;
pub use directory::Directory;
pub use inquiry::VerdictOutcome;
pub use notifications::NotificationStore;
pub use persist::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};
